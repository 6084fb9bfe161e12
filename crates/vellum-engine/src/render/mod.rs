//! Render surface abstraction and per-frame collaborators.
//!
//! The scene graph paints through [`RenderSurface`], a canvas-style immediate-mode API
//! with a save/restore transform stack. Backends (GPU, raster, SVG) implement the trait;
//! [`RecordingSurface`] captures the call stream for inspection.
//!
//! Convention:
//! - surface coordinates are pixels, top-left origin, +Y down
//! - every draw call is mapped through the current transform

mod recording;
mod ruler;
mod style;
mod surface;

pub use recording::{RecordedCmd, RecordingSurface, SurfaceCmd};
pub use ruler::{NoRuler, Ruler};
pub use style::Style;
pub use surface::RenderSurface;
