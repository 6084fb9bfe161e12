//! Coordinate and geometry types shared by the scene graph and render surfaces.
//!
//! Conventions:
//! - Origin top-left, +X right, +Y down
//! - Scene units for document geometry, pixels for the render surface
//! - Positive rotation angles turn clockwise on screen
//!
//! Everything here is pure; no type in this module touches a surface.

mod affine;
mod circle;
mod rect;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use circle::Circle;
pub use rect::{Rect, EDGE_EPSILON};
pub use vec2::{rotate_point, Vec2};
pub use viewport::{Viewport, ViewportProvider};
