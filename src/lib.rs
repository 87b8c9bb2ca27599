//! # Mockup-Forge
//!
//! Composite app screenshots into phone-frame store-listing mockups with
//! overlaid marketing text, and reposition the arrow element in icon artwork.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mockup_forge::{
//!     config::Config,
//!     mockup::MockupEngine,
//!     text::FontLibrary,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let fonts = FontLibrary::load(&config.text)?;
//!
//! let engine = MockupEngine::new(config, fonts);
//! engine.compose(
//!     "iPhone 17.png",
//!     "Screenshots/",
//!     "AppStore_Screenshots/",
//! ).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`canvas`] - RGBA image primitives and pixel operations
//! - [`screenshots`] - Source screenshot discovery
//! - [`text`] - Font loading and text block layout
//! - [`mockup`] - Store-listing mockup composition
//! - [`icon`] - Icon arrow repositioning
//! - [`config`] - Configuration management

pub mod canvas;
pub mod config;
pub mod error;
pub mod icon;
pub mod mockup;
pub mod screenshots;
pub mod text;

// Re-export commonly used types for convenience
pub use crate::{
    canvas::{Canvas, Region},
    config::Config,
    error::{ForgeError, Result},
    icon::IconEditor,
    mockup::MockupEngine,
    text::FontLibrary,
};
