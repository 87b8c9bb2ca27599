use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    canvas::{ops, Canvas},
    config::{Config, SlideSpec},
    error::{MockupError, Result},
    mockup::layout::SlideLayout,
    screenshots::ScreenshotSet,
    text::{self, FontLibrary},
};

/// Composition engine for store-listing mockups
///
/// The engine follows a fixed pipeline:
/// 1. Frame Loading - load and scale the phone-frame artwork once
/// 2. Screenshot Discovery - scan the source directory for captures
/// 3. Slide Planning - match configured slides against the captures
/// 4. Slide Rendering - composite background, screenshot, frame and text
/// 5. Output - save one numbered PNG per slide
pub struct MockupEngine {
    config: Config,
    fonts: FontLibrary,
}

/// One slide scheduled for rendering
#[derive(Debug, Clone)]
struct SlidePlan {
    index: usize,
    spec: SlideSpec,
    screenshot: PathBuf,
}

impl MockupEngine {
    /// Create a new engine with the given configuration and fonts
    pub fn new(config: Config, fonts: FontLibrary) -> Self {
        Self { config, fonts }
    }

    /// Render all configured slides into `output_dir`
    ///
    /// # Arguments
    ///
    /// * `frame_path` - Phone-frame artwork (PNG with transparent screen cutout)
    /// * `screenshots_dir` - Directory containing source screenshots
    /// * `output_dir` - Destination directory, created if missing
    pub async fn compose<P: AsRef<Path>>(
        &self,
        frame_path: P,
        screenshots_dir: P,
        output_dir: P,
    ) -> Result<()> {
        let frame_path = frame_path.as_ref();
        let screenshots_dir = screenshots_dir.as_ref();
        let output_dir = output_dir.as_ref();

        info!("🖼️  Starting mockup composition");
        info!("   Frame: {:?}", frame_path);
        info!("   Screenshots: {:?}", screenshots_dir);
        info!("   Output: {:?}", output_dir);

        // Step 1: Frame loading. The frame is scaled once and shared by all
        // slides since the layout depends only on its dimensions.
        let frame = Canvas::open(frame_path)?;
        let layout = SlideLayout::compute(&self.config.mockup, frame.width(), frame.height())?;
        let frame_scaled = frame.resized(layout.frame_size.0, layout.frame_size.1);
        debug!(
            "Frame {}x{} scaled to {}x{} at ({}, {})",
            frame.width(),
            frame.height(),
            layout.frame_size.0,
            layout.frame_size.1,
            layout.frame_pos.0,
            layout.frame_pos.1
        );

        // Step 2: Screenshot discovery
        let shots = ScreenshotSet::discover(screenshots_dir)?;
        if shots.is_empty() {
            return Err(MockupError::NoScreenshotsFound {
                path: screenshots_dir.display().to_string(),
            }
            .into());
        }

        // Step 3: Slide planning
        let plans = Self::plan_slides(&self.config.mockup.slides, &shots);
        if plans.is_empty() {
            return Err(MockupError::NoSlidesMatched {
                path: screenshots_dir.display().to_string(),
            }
            .into());
        }

        tokio::fs::create_dir_all(output_dir).await?;

        // Steps 4 + 5: Render and save, one rayon task per slide
        info!(
            "   Rendering {} slide(s) on {} thread(s)",
            plans.len(),
            self.config.processing.threads
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.processing.threads)
            .build()
            .map_err(|e| MockupError::OutputFailed {
                reason: format!("Failed to build thread pool: {}", e),
            })?;

        let outputs: Vec<PathBuf> = pool.install(|| {
            plans
                .par_iter()
                .map(|plan| {
                    let canvas = self.render_slide(&frame_scaled, &layout, plan)?;
                    let path = output_dir.join(output_filename(plan.index, &plan.spec.headline));
                    canvas.save_png(&path)?;
                    info!("   ✅ Created: {:?}", path);
                    Ok(path)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        info!(
            "🎉 Composition complete! {} mockup(s) saved to {:?}",
            outputs.len(),
            output_dir
        );
        Ok(())
    }

    /// Match configured slides against discovered screenshots
    ///
    /// Slides without a matching screenshot are skipped with a warning, in
    /// their configured position; the remaining slides keep their original
    /// indices so output numbering stays stable.
    fn plan_slides(slides: &[SlideSpec], shots: &ScreenshotSet) -> Vec<SlidePlan> {
        slides
            .iter()
            .enumerate()
            .filter_map(|(index, spec)| match shots.matching(&spec.suffix) {
                Some(shot) => {
                    debug!("Slide {:02}: '{}' -> {}", index + 1, spec.suffix, shot.stem);
                    Some(SlidePlan {
                        index,
                        spec: spec.clone(),
                        screenshot: shot.path.clone(),
                    })
                }
                None => {
                    warn!("No screenshot found for '{}', skipping slide {}", spec.suffix, index + 1);
                    None
                }
            })
            .collect()
    }

    /// Composite a single slide
    ///
    /// Layer order: background, screenshot, frame (the bezel overlaps the
    /// screenshot edges), text bubble, then the text itself.
    fn render_slide(
        &self,
        frame_scaled: &Canvas,
        layout: &SlideLayout,
        plan: &SlidePlan,
    ) -> Result<Canvas> {
        let cfg = &self.config.mockup;
        let text_cfg = &self.config.text;

        let [r, g, b] = cfg.background;
        let mut canvas = Canvas::filled(cfg.canvas_width, cfg.canvas_height, [r, g, b, 255]);

        let screenshot = Canvas::open(&plan.screenshot)?
            .resized(layout.screen_size.0, layout.screen_size.1);

        canvas.overlay(&screenshot, layout.screen_pos.0, layout.screen_pos.1);
        canvas.overlay(frame_scaled, layout.frame_pos.0, layout.frame_pos.1);

        let metrics = text::layout::measure(
            &self.fonts,
            text_cfg,
            &plan.spec.headline,
            &plan.spec.subheadline,
        );

        // Center the block in the area above the frame, biased down slightly
        let start_y = ((layout.text_area_height() - metrics.total_height as i64) / 2
            + text_cfg.block_bias as i64) as i32;

        let bubble = &text_cfg.bubble;
        let canvas_width = cfg.canvas_width as i64;
        let x1 = (canvas_width - metrics.max_width as i64) / 2 - bubble.padding_x as i64;
        let y1 = start_y as i64 - bubble.padding_y as i64;
        let x2 = (canvas_width + metrics.max_width as i64) / 2 + bubble.padding_x as i64;
        let y2 = start_y as i64 + metrics.total_height as i64 + bubble.padding_y as i64;

        let [r, g, b] = bubble.color;
        // x2/y2 are inclusive bubble coordinates
        ops::fill_rounded_rect(
            &mut canvas,
            x1,
            y1,
            x2 + 1,
            y2 + 1,
            bubble.radius as i64,
            [r, g, b, 255],
        );

        text::layout::draw(
            &mut canvas,
            &self.fonts,
            text_cfg,
            &plan.spec.headline,
            &plan.spec.subheadline,
            &metrics,
            start_y,
        );

        Ok(canvas)
    }
}

/// Output filename for a slide: `NN_Headline_With_Underscores.png`
///
/// Numbering is 1-based over the configured slide list, so a skipped slide
/// leaves a visible gap rather than renumbering the rest.
pub fn output_filename(index: usize, headline: &str) -> String {
    format!(
        "{:02}_{}.png",
        index + 1,
        headline.replace('\n', "_").replace(' ', "_")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockupConfig;
    use tempfile::tempdir;

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename(0, "4 Ways to\nProgress"), "01_4_Ways_to_Progress.png");
        assert_eq!(output_filename(6, "See Your\nGains"), "07_See_Your_Gains.png");
    }

    #[test]
    fn test_plan_slides_skips_missing() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("shot 19.12.24.png"), b"").unwrap();
        std::fs::write(dir.path().join("shot 19.18.50.png"), b"").unwrap();

        let shots = ScreenshotSet::discover(dir.path()).unwrap();
        let slides = MockupConfig::default().slides;

        let plans = MockupEngine::plan_slides(&slides, &shots);

        // Only the two suffixes present in the directory match
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].index, 0);
        assert_eq!(plans[0].spec.suffix, "19.12.24");
        assert_eq!(plans[1].index, 5);
    }

    #[test]
    fn test_plan_slides_empty_set() {
        let dir = tempdir().unwrap();
        let shots = ScreenshotSet::discover(dir.path()).unwrap();
        let slides = MockupConfig::default().slides;

        assert!(MockupEngine::plan_slides(&slides, &shots).is_empty());
    }

    #[tokio::test]
    async fn test_compose_end_to_end() {
        // Needs a real font; returns early on systems without any candidate
        let mut config = Config::default();
        config.mockup.canvas_width = 320;
        config.mockup.canvas_height = 694;
        config.text.headline_size = 30.0;
        config.text.subheadline_size = 14.0;
        config.mockup.slides = vec![SlideSpec::new("19.12.24", "Hello\nWorld", "sub")];

        let fonts = match FontLibrary::load(&config.text) {
            Ok(fonts) => fonts,
            Err(_) => return,
        };

        let dir = tempdir().unwrap();
        let frame_path = dir.path().join("frame.png");
        let shots_dir = dir.path().join("shots");
        let out_dir = dir.path().join("out");
        std::fs::create_dir(&shots_dir).unwrap();

        Canvas::filled(100, 220, [0, 0, 0, 255]).save_png(&frame_path).unwrap();
        Canvas::filled(90, 200, [50, 60, 70, 255])
            .save_png(shots_dir.join("capture 19.12.24.png"))
            .unwrap();

        let engine = MockupEngine::new(config, fonts);
        engine.compose(&frame_path, &shots_dir, &out_dir).await.unwrap();

        let output = out_dir.join("01_Hello_World.png");
        let canvas = Canvas::open(&output).unwrap();
        assert_eq!(canvas.width(), 320);
        assert_eq!(canvas.height(), 694);
    }

    #[tokio::test]
    async fn test_compose_errors_without_screenshots() {
        let config = Config::default();
        let fonts = match FontLibrary::load(&config.text) {
            Ok(fonts) => fonts,
            Err(_) => return,
        };

        let dir = tempdir().unwrap();
        let frame_path = dir.path().join("frame.png");
        let shots_dir = dir.path().join("shots");
        std::fs::create_dir(&shots_dir).unwrap();
        Canvas::filled(100, 220, [0, 0, 0, 255]).save_png(&frame_path).unwrap();

        let engine = MockupEngine::new(config, fonts);
        let result = engine
            .compose(&frame_path, &shots_dir, &dir.path().join("out"))
            .await;
        assert!(result.is_err());
    }
}
