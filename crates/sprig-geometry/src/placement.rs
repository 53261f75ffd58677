//! Placement context
//!
//! Maps design-space positions (top-left origin, Y down, offset from the
//! document's base point) into anchored UI-space positions (center
//! origin, Y up). This is the single Y-flip point in the system; every
//! caller routes through it.

use crate::Vec2;

/// Per-build coordinate mapper. Immutable once constructed.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    image_size: Vec2,
    canvas_size: Vec2,
    base_position: Vec2,
}

impl Placement {
    pub fn new(image_size: Vec2, canvas_size: Vec2, base_position: Vec2) -> Self {
        Self {
            image_size,
            canvas_size,
            base_position,
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Anchored position of a box given its design-space top-left corner
    /// and size: the box center, mapped.
    pub fn calc_position(&self, top_left: Vec2, size: Vec2) -> Vec2 {
        self.calc_point(top_left + size / 2.0)
    }

    /// Map a single design-space point: subtract the base offset, then
    /// flip the Y sign.
    pub fn calc_point(&self, point: Vec2) -> Vec2 {
        let p = point - self.base_position;
        Vec2::new(p.x, -p.y)
    }

    /// Outer canvas bounds in UI space, adjusted by half the delta
    /// between the full source-image size and the visible canvas size.
    /// Used to sanity-check element bounds against the declared canvas.
    pub fn four_corners(&self) -> (Vec2, Vec2) {
        let inset = (self.image_size - self.canvas_size) / 2.0;
        let min = self.calc_point(Vec2::ZERO) + inset;
        let max = self.calc_point(self.image_size) - inset;
        (min, max)
    }
}
