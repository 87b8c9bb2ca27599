//! Raster primitives shared by the mockup and icon pipelines

pub mod ops;
pub mod types;

pub use types::{Canvas, Region};
