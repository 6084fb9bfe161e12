//! Scene graph: shape model, container, render pipeline and geometric queries.
//!
//! Responsibilities:
//! - own the ordered shape list (paint order = reverse hit-test order)
//! - run the per-frame pipeline: cull, paint, overlay selection/marquee/handle/ruler
//! - answer hit-testing and selection-geometry queries for editing tools
//!
//! Selection and viewport state belong to collaborators and are re-read on every use.

mod graph;
mod handle;
mod marquee;
mod pipeline;
mod shape;


pub use graph::SceneGraph;
pub use handle::rotation_handle;
pub use marquee::MarqueePatch;
pub use pipeline::FrameStats;
pub use shape::{Shape, ShapeHandle, ShapeKind, WeakShape, DEFAULT_FILL};
