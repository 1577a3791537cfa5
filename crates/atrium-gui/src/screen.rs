use std::rc::Rc;
use std::time::Duration;

use atrium_core::Rect;

use crate::control::{ControlId, ControlVisual};
use crate::tree::ControlTree;

/// Layout is an external per-screen operation: the host positions the
/// screen's controls against the bounding rectangle. The core only decides
/// when it runs (on insertion and whenever the dirty flag is set).
pub type LayoutFn = Rc<dyn Fn(&mut ControlTree, Rect)>;

pub type UpdateFn = Rc<dyn Fn(Duration)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenId(pub u64);

/// A top-level UI surface owning a root control collection and a window
/// collection. Screens live in an ordered collection on the GUI system;
/// insertion order is z-order and the last screen is the active one.
pub struct Screen {
    id: ScreenId,
    visible: bool,
    layout_required: bool,
    controls: Vec<ControlId>,
    windows: Vec<ControlId>,
    layout: Option<LayoutFn>,
    on_update: Option<UpdateFn>,
    cursor: Option<ControlVisual>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            id: ScreenId(0),
            visible: true,
            layout_required: true,
            controls: Vec::new(),
            windows: Vec::new(),
            layout: None,
            on_update: None,
            cursor: None,
        }
    }

    pub fn with_layout(mut self, layout: impl Fn(&mut ControlTree, Rect) + 'static) -> Self {
        self.layout = Some(Rc::new(layout));
        self
    }

    pub fn with_update(mut self, on_update: impl Fn(Duration) + 'static) -> Self {
        self.on_update = Some(Rc::new(on_update));
        self
    }

    pub fn with_cursor(mut self, cursor: ControlVisual) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Assigned when the screen is added to a GUI system.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ScreenId) {
        self.id = id;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_layout_required(&self) -> bool {
        self.layout_required
    }

    /// Marks the screen for re-layout at the start of the next update tick.
    pub fn invalidate_layout(&mut self) {
        self.layout_required = true;
    }

    /// Adds a root control, on top of the existing ones.
    pub fn add_control(&mut self, id: ControlId) {
        self.controls.push(id);
    }

    /// Adds a window; windows draw after all inline controls.
    pub fn add_window(&mut self, id: ControlId) {
        self.windows.push(id);
    }

    pub fn controls(&self) -> &[ControlId] {
        &self.controls
    }

    pub fn windows(&self) -> &[ControlId] {
        &self.windows
    }

    pub fn cursor(&self) -> Option<&ControlVisual> {
        self.cursor.as_ref()
    }

    pub(crate) fn detach_root(&mut self, id: ControlId) {
        self.controls.retain(|c| *c != id);
        self.windows.retain(|c| *c != id);
    }

    pub(crate) fn perform_layout(&mut self, tree: &mut ControlTree, bounds: Rect) {
        log::trace!("layout screen {:?} against {:?}", self.id, bounds);
        if let Some(layout) = self.layout.clone() {
            layout(tree, bounds);
        }
        self.layout_required = false;
    }

    pub(crate) fn run_update(&self, elapsed: Duration) {
        if let Some(on_update) = &self.on_update {
            on_update(elapsed);
        }
    }
}
