//! Design-space bounding area
//!
//! Axis-aligned bounding box with union semantics. The empty area is the
//! identity element for `merge`, so a group with no children contributes
//! nothing to its ancestors.

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Axis-aligned bounding box in design space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    min: Vec2,
    max: Vec2,
    empty: bool,
}

impl Area {
    /// Box spanning `min` to `max`
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max, empty: false }
    }

    /// Box from a top-left position and a size
    pub fn from_position_and_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position, position + size)
    }

    /// The empty area: merging it into anything is a no-op
    pub fn none() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).abs()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Union `other` into this box.
    ///
    /// Each axis is expanded independently, so a merge can only grow the
    /// box. Merging an empty area is a no-op; merging into an empty area
    /// adopts the other box.
    pub fn merge(&mut self, other: &Area) {
        if other.empty {
            return;
        }
        if self.empty {
            *self = *other;
            return;
        }

        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::none()
    }
}
