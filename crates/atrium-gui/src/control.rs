use std::rc::Rc;

use atrium_core::{Color, KeyEvent, PointerEvent, Rect, TextureRegion, Vec2};
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// Generational handle to a control in a [`ControlTree`].
    ///
    /// A removed control's id simply stops resolving; holders of stale ids
    /// (including the dispatcher's hover/focus state) observe "no control"
    /// rather than a dangling reference.
    ///
    /// [`ControlTree`]: crate::tree::ControlTree
    pub struct ControlId;
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControlFlags: u8 {
        const VISIBLE = 1 << 0;
        const FOCUSED = 1 << 1;
    }
}

/// What a control looks like: a texture region stamped at the control's
/// position. Anything richer (nine-patch, text) is a renderer concern and
/// lives host-side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlVisual {
    pub region: TextureRegion,
    pub tint: Color,
}

impl ControlVisual {
    pub fn new(region: TextureRegion) -> Self {
        ControlVisual {
            region,
            tint: Color::WHITE,
        }
    }

    pub fn tinted(region: TextureRegion, tint: Color) -> Self {
        ControlVisual { region, tint }
    }
}

/// Event delivered to a control handler during propagation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(PointerEvent),
    PointerEnter(PointerEvent),
    PointerLeave(PointerEvent),
    Focus,
    Unfocus,
    KeyTyped(KeyEvent),
    KeyPressed(KeyEvent),
    Scrolled(f32),
}

/// Handler verdict: `Continue` bubbles the event to the parent, `Handled`
/// stops propagation at this control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Handled,
}

pub type EventHandler = Rc<dyn Fn(&ControlEvent) -> Dispatch>;

/// A single widget node: bounds, state flags, tree links, and an optional
/// event handler. Children are owned through the arena; the parent link is
/// a non-owning back-reference for upward propagation only.
pub struct Control {
    pub rect: Rect,
    flags: ControlFlags,
    pub(crate) parent: Option<ControlId>,
    pub(crate) children: SmallVec<[ControlId; 4]>,
    pub(crate) handler: Option<EventHandler>,
    pub visual: Option<ControlVisual>,
}

impl Control {
    pub fn new(rect: Rect) -> Self {
        Control {
            rect,
            flags: ControlFlags::VISIBLE,
            parent: None,
            children: SmallVec::new(),
            handler: None,
            visual: None,
        }
    }

    pub fn with_handler(mut self, handler: impl Fn(&ControlEvent) -> Dispatch + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    pub fn with_visual(mut self, visual: ControlVisual) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.flags.remove(ControlFlags::VISIBLE);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ControlFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ControlFlags::VISIBLE, visible);
    }

    pub fn is_focused(&self) -> bool {
        self.flags.contains(ControlFlags::FOCUSED)
    }

    // Only the dispatcher's focus transition may flip this flag.
    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.flags.set(ControlFlags::FOCUSED, focused);
    }

    pub fn set_handler(&mut self, handler: impl Fn(&ControlEvent) -> Dispatch + 'static) {
        self.handler = Some(Rc::new(handler));
    }

    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}
