//! Vellum engine crate.
//!
//! Rendering and geometry core of a 2D vector editor: the shape model, the scene graph
//! with its frame-coalesced render pipeline, and the hit-testing and selection queries
//! editing tools are built on. Surfaces, viewport and selection state are collaborators
//! plugged in through traits.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod select;
pub mod time;
