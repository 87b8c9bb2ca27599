use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    canvas::{ops, Canvas, Region},
    config::{ArrowConfig, IconConfig},
    error::{IconError, Result},
};

/// Pixel geometry of the arrow move for one icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowRegion {
    /// Where the arrow currently sits
    pub source: Region,

    /// Top edge of the arrow's destination; the left edge is unchanged
    pub new_top: u32,
}

impl ArrowRegion {
    /// Resolve the configured ratios against concrete image dimensions
    ///
    /// Ratios are floored to pixel coordinates. Images too small to produce a
    /// non-empty region are rejected.
    pub fn for_size(config: &ArrowConfig, width: u32, height: u32) -> Result<Self> {
        let left = (width as f64 * config.left_ratio) as u32;
        let right = (width as f64 * config.right_ratio) as u32;
        let top = (height as f64 * config.top_ratio) as u32;
        let bottom = (height as f64 * config.bottom_ratio) as u32;

        if right <= left || bottom <= top {
            return Err(IconError::DegenerateRegion { width, height }.into());
        }

        Ok(Self {
            source: Region::new(left, top, right, bottom)?,
            new_top: (height as f64 * config.new_top_ratio) as u32,
        })
    }
}

/// Edits icon artwork: flips the arrow element and moves it to the top
///
/// The vacated region is patched with a horizontal blend of the background
/// colors sampled just outside its left and right edges.
pub struct IconEditor {
    config: IconConfig,
}

impl IconEditor {
    /// Create a new editor with the given configuration
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// Flip and move the arrow within a single icon, in place
    pub fn reposition(&self, canvas: &mut Canvas) -> Result<ArrowRegion> {
        let arrow = ArrowRegion::for_size(&self.config.arrow, canvas.width(), canvas.height())?;
        debug!(
            "Arrow region {},{}..{},{} -> new top {}",
            arrow.source.left, arrow.source.top, arrow.source.right, arrow.source.bottom,
            arrow.new_top
        );

        let flipped = canvas.crop(&arrow.source)?.flipped_vertical();

        ops::blend_fill_horizontal(canvas, &arrow.source, self.config.arrow.sample_offset)?;

        // The flipped cutout carries its own alpha, so the paste blends
        canvas.overlay(&flipped, arrow.source.left as i64, arrow.new_top as i64);

        Ok(arrow)
    }

    /// Edit every configured icon found under `assets_dir`
    ///
    /// Missing icons are skipped with a warning. Files are rewritten in place
    /// unless `output_dir` redirects the results. Returns the number of icons
    /// updated; updating none is an error.
    pub async fn process_directory<P: AsRef<Path>>(
        &self,
        assets_dir: P,
        output_dir: Option<&Path>,
    ) -> Result<usize> {
        let assets_dir = assets_dir.as_ref();

        info!("🛠️  Repositioning arrow in icons under {:?}", assets_dir);

        if let Some(dir) = output_dir {
            tokio::fs::create_dir_all(dir).await?;
        }

        let mut updated = 0;
        for name in &self.config.names {
            let path = assets_dir.join(name);

            if !path.exists() {
                warn!("Skipping {} - not found", name);
                continue;
            }

            let mut canvas = Canvas::open(&path)?;
            self.reposition(&mut canvas)?;

            let target = match output_dir {
                Some(dir) => dir.join(name),
                None => path,
            };
            canvas.save_png(&target)?;

            info!("   ✅ Updated: {}", name);
            updated += 1;
        }

        if updated == 0 {
            return Err(IconError::NothingProcessed {
                path: assets_dir.display().to_string(),
            }
            .into());
        }

        info!("🎉 Arrow flipped and repositioned in {} icon(s)", updated);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconConfig;
    use tempfile::tempdir;

    #[test]
    fn test_arrow_region_for_100px_icon() {
        let config = ArrowConfig::default();
        let arrow = ArrowRegion::for_size(&config, 100, 100).unwrap();

        assert_eq!(arrow.source, Region::new(38, 65, 62, 92).unwrap());
        assert_eq!(arrow.new_top, 12);
    }

    #[test]
    fn test_arrow_region_for_small_icon() {
        let config = ArrowConfig::default();
        let arrow = ArrowRegion::for_size(&config, 64, 64).unwrap();

        assert_eq!(arrow.source, Region::new(24, 41, 39, 58).unwrap());
        assert_eq!(arrow.new_top, 7);
    }

    #[test]
    fn test_arrow_region_degenerate() {
        let config = ArrowConfig::default();
        assert!(ArrowRegion::for_size(&config, 3, 3).is_err());
        assert!(ArrowRegion::for_size(&config, 0, 100).is_err());
    }

    #[test]
    fn test_reposition_moves_and_flips_pixel() {
        // Opaque green icon with one red arrow pixel inside the source region
        let mut canvas = Canvas::filled(100, 100, [0, 180, 0, 255]);
        canvas.set_pixel(50, 70, [255, 0, 0, 255]);

        let editor = IconEditor::new(IconConfig::default());
        let arrow = editor.reposition(&mut canvas).unwrap();
        assert_eq!(arrow.source, Region::new(38, 65, 62, 92).unwrap());

        // (50, 70) is (12, 5) within the 24x27 region; the vertical flip puts
        // it on row 21, pasted at (38 + 12, 12 + 21)
        assert_eq!(canvas.get_pixel(50, 33), [255, 0, 0, 255]);

        // The vacated spot is patched with the surrounding green
        assert_eq!(canvas.get_pixel(50, 70), [0, 180, 0, 255]);
    }

    #[test]
    fn test_reposition_rejects_tiny_canvas() {
        let mut canvas = Canvas::filled(2, 2, [0, 0, 0, 255]);
        let editor = IconEditor::new(IconConfig::default());
        assert!(editor.reposition(&mut canvas).is_err());
    }

    #[tokio::test]
    async fn test_process_directory_in_place() {
        let dir = tempdir().unwrap();

        // Two of the four configured icons exist
        for name in ["icon.png", "favicon.png"] {
            let mut canvas = Canvas::filled(100, 100, [0, 180, 0, 255]);
            canvas.set_pixel(50, 70, [255, 0, 0, 255]);
            canvas.save_png(dir.path().join(name)).unwrap();
        }

        let editor = IconEditor::new(IconConfig::default());
        let updated = editor.process_directory(dir.path(), None).await.unwrap();
        assert_eq!(updated, 2);

        let reloaded = Canvas::open(dir.path().join("icon.png")).unwrap();
        assert_eq!(reloaded.get_pixel(50, 33), [255, 0, 0, 255]);
    }

    #[tokio::test]
    async fn test_process_directory_nothing_to_do() {
        let dir = tempdir().unwrap();
        let editor = IconEditor::new(IconConfig::default());
        assert!(editor.process_directory(dir.path(), None).await.is_err());
    }

    #[tokio::test]
    async fn test_process_directory_with_output_override() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("edited");

        let original = Canvas::filled(100, 100, [0, 180, 0, 255]);
        original.save_png(dir.path().join("icon.png")).unwrap();

        let editor = IconEditor::new(IconConfig::default());
        editor
            .process_directory(dir.path(), Some(out.as_path()))
            .await
            .unwrap();

        // Original untouched, edited copy written to the override directory
        assert!(out.join("icon.png").exists());
        let untouched = Canvas::open(dir.path().join("icon.png")).unwrap();
        assert_eq!(untouched.get_pixel(50, 70), [0, 180, 0, 255]);
    }
}
