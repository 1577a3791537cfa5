use atrium_core::{DrawSurface, Vec2};
use slotmap::SlotMap;

use crate::control::{Control, ControlId};

/// Arena holding every control of a GUI instance. Screens reference their
/// root controls by id; ownership of whole subtrees lives here.
#[derive(Default)]
pub struct ControlTree {
    nodes: SlotMap<ControlId, Control>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a detached control (a root until attached to a parent or
    /// listed on a screen).
    pub fn insert(&mut self, control: Control) -> ControlId {
        self.nodes.insert(control)
    }

    /// Inserts `control` as the top-most (last) child of `parent`. Returns
    /// `None` when the parent id is stale.
    pub fn insert_child(&mut self, parent: ControlId, mut control: Control) -> Option<ControlId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        control.parent = Some(parent);
        let id = self.nodes.insert(control);
        self.nodes[parent].children.push(id);
        Some(id)
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes a control and its whole subtree, detaching it from its
    /// parent's child list first. Stale ids are ignored.
    pub fn remove_subtree(&mut self, id: ControlId) {
        let Some(parent) = self.nodes.get(id).map(|c| c.parent) else {
            return;
        };
        if let Some(parent) = parent {
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(control) = self.nodes.remove(current) {
                stack.extend_from_slice(&control.children);
            }
        }
    }

    /// Whether `ancestor` appears anywhere on `id`'s parent chain.
    pub fn has_ancestor(&self, id: ControlId, ancestor: ControlId) -> bool {
        let mut current = self.nodes.get(id).and_then(|c| c.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes.get(p).and_then(|c| c.parent);
        }
        false
    }

    /// Returns the top-most visible control containing `point`.
    ///
    /// Siblings are scanned last-to-first so the first containment match at
    /// a level is already the highest in z-order; a hit in any visible
    /// sibling's subtree then takes precedence over that match. Invisible
    /// controls hide their whole subtree.
    pub fn hit_test(&self, roots: &[ControlId], point: Vec2) -> Option<ControlId> {
        let mut top_most = None;

        for &id in roots.iter().rev() {
            let Some(control) = self.nodes.get(id) else {
                continue;
            };
            if !control.is_visible() {
                continue;
            }
            if top_most.is_none() && control.contains(point) {
                top_most = Some(id);
            }
            if !control.children.is_empty() {
                if let Some(descendant) = self.hit_test(&control.children, point) {
                    top_most = Some(descendant);
                }
            }
        }

        top_most
    }

    /// Draws one level of controls back-to-front, then recurses into each
    /// visible control's children. Two passes per level: a control's later
    /// siblings paint over it, but every child paints over every sibling.
    pub fn draw_children(&self, ids: &[ControlId], surface: &mut dyn DrawSurface) {
        for &id in ids {
            let Some(control) = self.nodes.get(id) else {
                continue;
            };
            if !control.is_visible() {
                continue;
            }
            if let Some(visual) = &control.visual {
                surface.draw_region(&visual.region, control.rect.position(), visual.tint);
            }
        }
        for &id in ids {
            let Some(control) = self.nodes.get(id) else {
                continue;
            };
            if control.is_visible() {
                self.draw_children(&control.children, surface);
            }
        }
    }

    /// Draws windows in order, each window before its own children.
    pub fn draw_windows(&self, ids: &[ControlId], surface: &mut dyn DrawSurface) {
        for &id in ids {
            let Some(window) = self.nodes.get(id) else {
                continue;
            };
            if let Some(visual) = &window.visual {
                surface.draw_region(&visual.region, window.rect.position(), visual.tint);
            }
            self.draw_children(&window.children, surface);
        }
    }
}
