//! Paint model: fill and stroke colors.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
