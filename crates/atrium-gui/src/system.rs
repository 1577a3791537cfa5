use std::time::Duration;

use atrium_core::{
    DrawSurface, GuiError, InputEvent, InputListener, Rect, Vec2, ViewportAdapter,
};

use crate::control::{Control, ControlId};
use crate::dispatch::Dispatcher;
use crate::screen::{Screen, ScreenId};
use crate::tree::ControlTree;

/// The GUI instance: owns the control tree, the ordered screen collection,
/// the interaction state, and the host collaborators. The host engine
/// drives it with one `update` and one `draw` call per frame.
pub struct GuiSystem {
    viewport: Box<dyn ViewportAdapter>,
    surface: Box<dyn DrawSurface>,
    listeners: Vec<Box<dyn InputListener>>,
    tree: ControlTree,
    screens: Vec<Screen>,
    dispatcher: Dispatcher,
    next_screen_id: u64,
}

impl GuiSystem {
    pub fn new(
        viewport: impl ViewportAdapter + 'static,
        surface: impl DrawSurface + 'static,
    ) -> Self {
        GuiSystem {
            viewport: Box::new(viewport),
            surface: Box::new(surface),
            listeners: Vec::new(),
            tree: ControlTree::new(),
            screens: Vec::new(),
            dispatcher: Dispatcher::new(),
            next_screen_id: 1,
        }
    }

    pub fn add_listener(&mut self, listener: impl InputListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ControlTree {
        &mut self.tree
    }

    pub fn bounding_rectangle(&self) -> Rect {
        self.viewport.bounding_rectangle()
    }

    pub fn focused_control(&self) -> Option<ControlId> {
        self.dispatcher.focused()
    }

    pub fn hovered_control(&self) -> Option<ControlId> {
        self.dispatcher.hovered()
    }

    pub fn cursor_position(&self) -> Vec2 {
        self.dispatcher.cursor_position()
    }

    /// The last (topmost) screen, if any.
    pub fn active_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id() == id)
    }

    pub fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.id() == id)
    }

    /// Appends a screen on top of the collection. Insertion immediately
    /// runs the screen's layout pass against the current bounding rectangle.
    pub fn add_screen(&mut self, mut screen: Screen) -> ScreenId {
        let id = ScreenId(self.next_screen_id);
        self.next_screen_id += 1;
        screen.set_id(id);

        let bounds = self.viewport.bounding_rectangle();
        screen.perform_layout(&mut self.tree, bounds);

        log::debug!("screen {:?} added", id);
        self.screens.push(screen);
        id
    }

    /// Removes a screen together with its control and window subtrees. Any
    /// hover/focus state pointing into the removed subtrees is cleared
    /// without firing events.
    pub fn remove_screen(&mut self, id: ScreenId) -> Result<(), GuiError> {
        let index = self
            .screens
            .iter()
            .position(|s| s.id() == id)
            .ok_or(GuiError::UnknownScreen(id.0))?;
        let screen = self.screens.remove(index);

        for root in screen.controls().iter().chain(screen.windows()).copied() {
            self.tree.remove_subtree(root);
        }
        self.dispatcher.clear_dead(&self.tree);

        log::debug!("screen {:?} removed", id);
        Ok(())
    }

    /// Inserts a root control on a screen, on top of its existing controls.
    pub fn add_control(&mut self, screen: ScreenId, control: Control) -> Result<ControlId, GuiError> {
        let index = self
            .screens
            .iter()
            .position(|s| s.id() == screen)
            .ok_or(GuiError::UnknownScreen(screen.0))?;
        let id = self.tree.insert(control);
        self.screens[index].add_control(id);
        Ok(id)
    }

    /// Inserts a window on a screen; windows draw after inline controls.
    pub fn add_window(&mut self, screen: ScreenId, window: Control) -> Result<ControlId, GuiError> {
        let index = self
            .screens
            .iter()
            .position(|s| s.id() == screen)
            .ok_or(GuiError::UnknownScreen(screen.0))?;
        let id = self.tree.insert(window);
        self.screens[index].add_window(id);
        Ok(id)
    }

    /// Inserts a control as the topmost child of `parent`.
    pub fn add_child(&mut self, parent: ControlId, control: Control) -> Result<ControlId, GuiError> {
        self.tree
            .insert_child(parent, control)
            .ok_or(GuiError::StaleControl)
    }

    /// Removes a control subtree, detaching it from its parent or from any
    /// screen's root lists. Hover/focus ids that died with it are cleared
    /// without firing events.
    pub fn remove_control(&mut self, id: ControlId) {
        for screen in &mut self.screens {
            screen.detach_root(id);
        }
        self.tree.remove_subtree(id);
        self.dispatcher.clear_dead(&self.tree);
    }

    /// Requests focus for a control, or clears focus with `None`. Stale ids
    /// are a warned no-op.
    pub fn set_focus(&mut self, target: Option<ControlId>) -> Result<(), GuiError> {
        if let Some(id) = target {
            if !self.tree.contains(id) {
                log::warn!("set_focus: stale control id {:?}", id);
                return Err(GuiError::StaleControl);
            }
        }
        self.dispatcher.set_focus(&mut self.tree, target);
        Ok(())
    }

    /// Feeds one raw input event through viewport mapping and the
    /// dispatcher. Listeners funnel through here; hosts that translate
    /// their own engine events may call it directly.
    pub fn dispatch_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(mut e) => {
                e.position = self.viewport.point_to_virtual(e.position);
                let active = Self::active_roots(&self.screens);
                self.dispatcher.pointer_down(&self.tree, active, e);
            }
            InputEvent::PointerMove(mut e) => {
                e.position = self.viewport.point_to_virtual(e.position);
                let active = Self::active_roots(&self.screens);
                self.dispatcher.pointer_moved(&self.tree, active, e);
            }
            InputEvent::PointerUp(mut e) => {
                e.position = self.viewport.point_to_virtual(e.position);
                let active = Self::active_roots(&self.screens);
                self.dispatcher.pointer_up(&mut self.tree, active, e);
            }
            InputEvent::WheelMoved { delta } => {
                self.dispatcher.wheel_moved(&self.tree, delta);
            }
            InputEvent::KeyTyped(e) => {
                self.dispatcher.key_typed(&self.tree, e);
            }
            InputEvent::KeyPressed(e) => {
                self.dispatcher.key_pressed(&self.tree, e);
            }
        }
    }

    /// Update tick: polls every listener (events are dispatched fully
    /// inside the poll), then lays out every layout-dirty screen before its
    /// own update logic runs.
    pub fn update(&mut self, elapsed: Duration) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener.update(elapsed, &mut |event| self.dispatch_input(event));
        }
        self.listeners = listeners;

        let bounds = self.viewport.bounding_rectangle();
        for screen in &mut self.screens {
            if screen.is_layout_required() {
                screen.perform_layout(&mut self.tree, bounds);
            }
            screen.run_update(elapsed);
        }
    }

    /// Draw tick: screens back-to-front, each screen's inline controls then
    /// its windows; the active screen's cursor overlay draws last.
    pub fn draw(&mut self, _elapsed: Duration) {
        self.surface.begin();

        for screen in &self.screens {
            if screen.is_visible() {
                self.tree.draw_children(screen.controls(), &mut *self.surface);
                self.tree.draw_windows(screen.windows(), &mut *self.surface);
            }
        }

        if let Some(cursor) = self.screens.last().and_then(|s| s.cursor()) {
            let position = self.dispatcher.cursor_position();
            self.surface.draw_region(&cursor.region, position, cursor.tint);
        }

        self.surface.end();
    }

    fn active_roots(screens: &[Screen]) -> Option<&[ControlId]> {
        screens
            .last()
            .filter(|s| s.is_visible())
            .map(|s| s.controls())
    }
}
