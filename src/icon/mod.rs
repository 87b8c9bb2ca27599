//! Icon arrow repositioning

pub mod editor;

pub use editor::{ArrowRegion, IconEditor};
