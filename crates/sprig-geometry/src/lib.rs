//! Sprig Geometry
//!
//! Geometry primitives for the layout resolver: 2D vectors, design-space
//! bounding areas, and the mapping from design space (top-left origin,
//! Y down) to anchored UI space (center origin, Y up).

mod area;
mod placement;
mod vec2;

pub use area::Area;
pub use placement::Placement;
pub use vec2::Vec2;
