use std::cell::RefCell;
use std::rc::Rc;

use crate::{Color, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// A sub-rectangle of an engine-owned texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureRegion {
    pub texture: TextureId,
    pub source: Rect,
}

impl TextureRegion {
    pub fn new(texture: TextureId, source: Rect) -> Self {
        TextureRegion { texture, source }
    }
}

/// Rendering surface supplied by the host engine. Acquired with `begin` and
/// released with `end` once per draw tick; `draw_region` may only be called
/// between the two.
pub trait DrawSurface {
    fn begin(&mut self);
    fn draw_region(&mut self, region: &TextureRegion, position: Vec2, tint: Color);
    fn end(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub position: Vec2,
    pub tint: Color,
}

/// Records draw calls instead of rendering. Clones share the same log, so a
/// test can keep one handle while the GUI system owns the other.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    calls: Rc<RefCell<Vec<DrawCall>>>,
    frames: Rc<RefCell<u32>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// Number of completed `begin` calls so far.
    pub fn frames(&self) -> u32 {
        *self.frames.borrow()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn begin(&mut self) {
        *self.frames.borrow_mut() += 1;
    }

    fn draw_region(&mut self, region: &TextureRegion, position: Vec2, tint: Color) {
        self.calls.borrow_mut().push(DrawCall {
            texture: region.texture,
            position,
            tint,
        });
    }

    fn end(&mut self) {}
}
