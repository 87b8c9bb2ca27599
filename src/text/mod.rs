//! Font loading and marketing-text layout

pub mod font;
pub mod layout;

pub use font::FontLibrary;
pub use layout::{LineSize, TextBlockMetrics};
