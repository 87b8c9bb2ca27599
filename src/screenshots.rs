//! Screenshot discovery for the mockup pipeline
//!
//! Source screenshots are simulator captures named by timestamp, e.g.
//! `Simulator Screenshot - iPhone 15 Pro - 2024-12-19 at 19.12.24.png`.
//! Slides reference them by a stem substring (the `19.12.24` part).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AssetError, Result};

/// A discovered source screenshot
#[derive(Debug, Clone)]
pub struct Screenshot {
    /// Path to the PNG file
    pub path: PathBuf,

    /// File stem used for suffix matching
    pub stem: String,
}

impl Screenshot {
    /// Create a screenshot entry from a path; returns None for non-PNG files
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Option<Self> {
        let path = path.into();

        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return None;
        }

        let stem = path.file_stem()?.to_str()?.to_string();
        Some(Self { path, stem })
    }
}

/// The set of screenshots found in a source directory, sorted by filename
#[derive(Debug, Clone, Default)]
pub struct ScreenshotSet {
    shots: Vec<Screenshot>,
}

impl ScreenshotSet {
    /// Scan a directory for PNG screenshots
    ///
    /// Hidden files and non-PNG files are ignored. The result is sorted by
    /// filename so suffix matches are deterministic.
    pub fn discover<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();

        if !directory.is_dir() {
            return Err(AssetError::LoadFailed {
                path: directory.display().to_string(),
            }
            .into());
        }

        let mut shots = Vec::new();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();

            if !path.is_file() || is_hidden(&path) {
                continue;
            }

            if let Some(shot) = Screenshot::from_path(path) {
                debug!("Found screenshot: {}", shot.stem);
                shots.push(shot);
            }
        }

        shots.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

        info!("Discovered {} screenshot(s) in {:?}", shots.len(), directory);
        Ok(Self { shots })
    }

    /// Find the first screenshot whose stem contains the given suffix
    pub fn matching(&self, suffix: &str) -> Option<&Screenshot> {
        self.shots.iter().find(|shot| shot.stem.contains(suffix))
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Screenshot> {
        self.shots.iter()
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
