use std::path::PathBuf;

use ab_glyph::FontArc;
use tracing::{debug, info, warn};

use crate::config::TextConfig;
use crate::error::{Result, TextError};

/// The pair of fonts used for slide text
///
/// Candidate paths are tried in order and the first file that exists and
/// parses wins. There is deliberately no bitmap fallback: rendering store
/// marketing copy in a stand-in font is worse than failing loudly.
#[derive(Clone)]
pub struct FontLibrary {
    headline: FontArc,
    subheadline: FontArc,
}

impl FontLibrary {
    /// Load fonts from the candidate lists in the text configuration
    pub fn load(config: &TextConfig) -> Result<Self> {
        let headline = first_usable(&config.headline_fonts)?;
        let subheadline = first_usable(&config.subheadline_fonts)?;

        Ok(Self { headline, subheadline })
    }

    pub fn headline(&self) -> &FontArc {
        &self.headline
    }

    pub fn subheadline(&self) -> &FontArc {
        &self.subheadline
    }
}

/// Try candidate font paths in order, returning the first that parses
fn first_usable(candidates: &[PathBuf]) -> Result<FontArc> {
    for path in candidates {
        if !path.exists() {
            debug!("Font candidate not present: {:?}", path);
            continue;
        }

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read font file {:?}: {}", path, e);
                continue;
            }
        };

        match FontArc::try_from_vec(bytes) {
            Ok(font) => {
                info!("Loaded font: {:?}", path);
                return Ok(font);
            }
            Err(_) => {
                warn!("Could not parse font file: {:?}", path);
            }
        }
    }

    Err(TextError::NoUsableFont {
        candidates: candidates.len(),
    }
    .into())
}
