//! Store-listing mockup composition

pub mod engine;
pub mod layout;

pub use engine::{output_filename, MockupEngine};
pub use layout::SlideLayout;
