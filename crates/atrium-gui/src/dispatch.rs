use atrium_core::{KeyEvent, PointerEvent, Vec2};

use crate::control::{ControlEvent, ControlId, Dispatch};
use crate::tree::ControlTree;

/// Converts raw pointer/keyboard ticks into hover/focus/click semantics.
///
/// This is the sole mutator of the hovered/focused/pre-focus references and
/// of each control's focused flag. Pointer handlers receive `active` as the
/// active screen's root controls, or `None` when there is no active visible
/// screen, in which case they return without touching any state.
#[derive(Default)]
pub struct Dispatcher {
    hovered: Option<ControlId>,
    focused: Option<ControlId>,
    pre_focused: Option<ControlId>,
    cursor_position: Vec2,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    /// Remembers the hit control as the pre-focus candidate and bubbles the
    /// down event from the hovered control.
    pub fn pointer_down(
        &mut self,
        tree: &ControlTree,
        active: Option<&[ControlId]>,
        event: PointerEvent,
    ) {
        let Some(roots) = active else {
            return;
        };
        self.pre_focused = tree.hit_test(roots, event.position);
        Self::propagate(tree, self.hovered, &ControlEvent::PointerDown(event));
    }

    /// Commits focus only when the press and the release resolved to the
    /// same control; dragging off a control and releasing elsewhere changes
    /// nothing. Both resolving to no control clears focus.
    pub fn pointer_up(
        &mut self,
        tree: &mut ControlTree,
        active: Option<&[ControlId]>,
        event: PointerEvent,
    ) {
        let Some(roots) = active else {
            return;
        };
        let post_focused = tree.hit_test(roots, event.position);
        if self.pre_focused == post_focused {
            self.set_focus(tree, post_focused);
        }
        self.pre_focused = None;
        Self::propagate(tree, self.hovered, &ControlEvent::PointerUp(event));
    }

    /// Updates the cursor position, then runs the hover transition: leave
    /// from the old control (suppressed when moving into one of its own
    /// descendants, since the enter bubbles through the shared chain
    /// anyway), enter from the new one, or a plain move when unchanged.
    pub fn pointer_moved(
        &mut self,
        tree: &ControlTree,
        active: Option<&[ControlId]>,
        event: PointerEvent,
    ) {
        self.cursor_position = event.position;

        let Some(roots) = active else {
            return;
        };
        let hovered = tree.hit_test(roots, event.position);

        if self.hovered != hovered {
            if let Some(old) = self.hovered {
                let into_descendant = hovered.is_some_and(|new| tree.has_ancestor(new, old));
                if !into_descendant {
                    Self::propagate(tree, Some(old), &ControlEvent::PointerLeave(event));
                }
            }
            log::trace!("hover {:?} -> {:?}", self.hovered, hovered);
            self.hovered = hovered;
            Self::propagate(tree, self.hovered, &ControlEvent::PointerEnter(event));
        } else {
            Self::propagate(tree, self.hovered, &ControlEvent::PointerMove(event));
        }
    }

    /// Moves focus. No-op when the target already holds focus; `None`
    /// clears focus. Unfocus/focus events bubble from the affected control.
    pub fn set_focus(&mut self, tree: &mut ControlTree, target: Option<ControlId>) {
        if self.focused == target {
            return;
        }

        if let Some(old) = self.focused {
            if let Some(control) = tree.get_mut(old) {
                control.set_focused(false);
            }
            Self::propagate(tree, Some(old), &ControlEvent::Unfocus);
        }

        log::debug!("focus {:?} -> {:?}", self.focused, target);
        self.focused = target;

        if let Some(new) = self.focused {
            if let Some(control) = tree.get_mut(new) {
                control.set_focused(true);
            }
            Self::propagate(tree, Some(new), &ControlEvent::Focus);
        }
    }

    /// Keyboard events bypass hit-testing and bubble from the focused
    /// control.
    pub fn key_typed(&self, tree: &ControlTree, event: KeyEvent) {
        Self::propagate(tree, self.focused, &ControlEvent::KeyTyped(event));
    }

    pub fn key_pressed(&self, tree: &ControlTree, event: KeyEvent) {
        Self::propagate(tree, self.focused, &ControlEvent::KeyPressed(event));
    }

    /// Scroll is delivered to the focused control only, never bubbled.
    pub fn wheel_moved(&self, tree: &ControlTree, delta: f32) {
        let Some(focused) = self.focused else {
            return;
        };
        let Some(control) = tree.get(focused) else {
            return;
        };
        if let Some(handler) = control.handler.clone() {
            handler(&ControlEvent::Scrolled(delta));
        }
    }

    /// Walks the parent chain from `start`, invoking each handler until one
    /// returns [`Dispatch::Handled`] or the chain runs out. Controls without
    /// a handler pass the event through.
    fn propagate(tree: &ControlTree, start: Option<ControlId>, event: &ControlEvent) {
        let mut current = start;
        while let Some(id) = current {
            let Some(control) = tree.get(id) else {
                break;
            };
            if let Some(handler) = control.handler.clone() {
                if handler(event) == Dispatch::Handled {
                    break;
                }
            }
            current = control.parent;
        }
    }

    /// Drops hover/focus/pre-focus ids that no longer resolve. Called after
    /// control or screen removal; fires no events.
    pub fn clear_dead(&mut self, tree: &ControlTree) {
        for slot in [
            &mut self.hovered,
            &mut self.focused,
            &mut self.pre_focused,
        ] {
            if slot.is_some_and(|id| !tree.contains(id)) {
                *slot = None;
            }
        }
    }
}
