use crate::{Rect, Vec2};

/// Maps raw pointer coordinates into UI space and supplies the rectangle
/// screens are laid out against. Implemented by the host engine; the two
/// implementations here cover tests, demos, and the common letterbox-free
/// scaling case.
pub trait ViewportAdapter {
    fn bounding_rectangle(&self) -> Rect;
    fn point_to_virtual(&self, point: Vec2) -> Vec2;
}

/// Identity viewport: raw coordinates are already UI coordinates.
#[derive(Clone, Copy, Debug)]
pub struct StaticViewport {
    pub width: f32,
    pub height: f32,
}

impl StaticViewport {
    pub fn new(width: f32, height: f32) -> Self {
        StaticViewport { width, height }
    }
}

impl ViewportAdapter for StaticViewport {
    fn bounding_rectangle(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    fn point_to_virtual(&self, point: Vec2) -> Vec2 {
        point
    }
}

/// Scales a physical window onto a fixed virtual resolution.
#[derive(Clone, Copy, Debug)]
pub struct ScalingViewport {
    pub virtual_width: f32,
    pub virtual_height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl ScalingViewport {
    pub fn new(virtual_width: f32, virtual_height: f32) -> Self {
        ScalingViewport {
            virtual_width,
            virtual_height,
            screen_width: virtual_width,
            screen_height: virtual_height,
        }
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }
}

impl ViewportAdapter for ScalingViewport {
    fn bounding_rectangle(&self) -> Rect {
        Rect::new(0.0, 0.0, self.virtual_width, self.virtual_height)
    }

    fn point_to_virtual(&self, point: Vec2) -> Vec2 {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            log::warn!("scaling viewport has a degenerate screen size, passing point through");
            return point;
        }
        Vec2 {
            x: point.x * self.virtual_width / self.screen_width,
            y: point.y * self.virtual_height / self.screen_height,
        }
    }
}
