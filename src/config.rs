use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for Mockup-Forge
///
/// Every numeric default matches the constants the store-listing assets were
/// originally produced with, so running with no configuration file reproduces
/// the shipped artwork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store-listing mockup settings
    pub mockup: MockupConfig,

    /// Text and font settings
    pub text: TextConfig,

    /// Icon arrow repositioning settings
    pub icon: IconConfig,

    /// Parallel processing settings
    pub processing: ProcessingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mockup: MockupConfig::default(),
            text: TextConfig::default(),
            icon: IconConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.mockup.validate()?;
        self.text.validate()?;
        self.icon.validate()?;
        self.processing.validate()?;
        Ok(())
    }
}

/// One store-listing slide: which screenshot to use and what to say over it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Substring matched against screenshot file stems (capture timestamps)
    pub suffix: String,

    /// Headline text; embedded newlines produce multiple centered lines
    pub headline: String,

    /// Single-line subheadline below the headline
    pub subheadline: String,
}

impl SlideSpec {
    pub fn new(suffix: &str, headline: &str, subheadline: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
        }
    }
}

/// Store-listing mockup composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockupConfig {
    /// Output canvas width in pixels (6.5" display listing size)
    pub canvas_width: u32,

    /// Output canvas height in pixels
    pub canvas_height: u32,

    /// Canvas background color (RGB)
    pub background: [u8; 3],

    /// Phone frame height as a fraction of canvas height
    pub frame_height_ratio: f64,

    /// Gap between the frame and the bottom canvas edge, in pixels
    pub frame_bottom_margin: u32,

    /// Screenshot width as a fraction of the scaled frame width
    pub screen_width_ratio: f64,

    /// Screenshot height as a fraction of the scaled frame height
    pub screen_height_ratio: f64,

    /// Screenshot top offset as a fraction of the scaled frame height
    pub screen_top_ratio: f64,

    /// Slides to render, in output order
    pub slides: Vec<SlideSpec>,
}

impl Default for MockupConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1284,
            canvas_height: 2778,
            background: [253, 250, 243],
            frame_height_ratio: 0.82,
            frame_bottom_margin: 15,
            screen_width_ratio: 0.885,
            screen_height_ratio: 0.955,
            screen_top_ratio: 0.022,
            slides: vec![
                SlideSpec::new("19.12.24", "4 Ways to\nProgress", "Not just linear"),
                SlideSpec::new("19.17.29", "Ready When\nYou Are", "No nonsense. Just lift."),
                SlideSpec::new("19.14.14", "Built-in\nRest Timer", "Tap. Rest. Repeat."),
                SlideSpec::new("19.15.43", "Log Sets in\nOne Tap", "Simple set tracking"),
                SlideSpec::new("19.18.11", "Choose Your\nProgram", "Or build your own"),
                SlideSpec::new("19.18.50", "100+ Exercises\nBuilt In", "Everything you need"),
                SlideSpec::new("19.22.46", "See Your\nGains", "Track your progress"),
            ],
        }
    }
}

impl MockupConfig {
    fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "mockup.canvas".to_string(),
                value: format!("{}x{}", self.canvas_width, self.canvas_height),
            }
            .into());
        }

        for (key, ratio) in [
            ("mockup.frame_height_ratio", self.frame_height_ratio),
            ("mockup.screen_width_ratio", self.screen_width_ratio),
            ("mockup.screen_height_ratio", self.screen_height_ratio),
        ] {
            if !(0.0 < ratio && ratio <= 1.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: ratio.to_string(),
                }
                .into());
            }
        }

        if !(0.0..1.0).contains(&self.screen_top_ratio) {
            return Err(ConfigError::InvalidValue {
                key: "mockup.screen_top_ratio".to_string(),
                value: self.screen_top_ratio.to_string(),
            }
            .into());
        }

        if self.slides.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "mockup.slides".to_string(),
                value: "empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Text bubble (rounded card behind the marketing copy)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleConfig {
    /// Bubble fill color (RGB)
    pub color: [u8; 3],

    /// Horizontal padding around the widest text line
    pub padding_x: i32,

    /// Vertical padding above and below the text block
    pub padding_y: i32,

    /// Corner radius in pixels
    pub radius: i32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            color: [255, 253, 250],
            padding_x: 60,
            padding_y: 35,
            radius: 30,
        }
    }
}

/// Fonts, sizes and spacing for the marketing text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Headline font size in pixels
    pub headline_size: f32,

    /// Subheadline font size in pixels
    pub subheadline_size: f32,

    /// Vertical gap appended after each headline line
    pub line_gap: i32,

    /// Gap between the headline block and the subheadline
    pub headline_gap: i32,

    /// Downward bias applied when centering the text block above the frame
    pub block_bias: i32,

    /// Headline color (RGB)
    pub headline_color: [u8; 3],

    /// Subheadline color (RGB)
    pub subheadline_color: [u8; 3],

    /// Text bubble settings
    pub bubble: BubbleConfig,

    /// Candidate font files for the headline, tried in order
    pub headline_fonts: Vec<PathBuf>,

    /// Candidate font files for the subheadline, tried in order
    pub subheadline_fonts: Vec<PathBuf>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            headline_size: 125.0,
            subheadline_size: 54.0,
            line_gap: 12,
            headline_gap: 55,
            block_bias: 20,
            headline_color: [17, 24, 39],
            subheadline_color: [82, 82, 91],
            bubble: BubbleConfig::default(),
            headline_fonts: default_headline_fonts(),
            subheadline_fonts: default_subheadline_fonts(),
        }
    }
}

impl TextConfig {
    fn validate(&self) -> Result<()> {
        if self.headline_size <= 0.0 || self.subheadline_size <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "text.font_sizes".to_string(),
                value: format!("{}/{}", self.headline_size, self.subheadline_size),
            }
            .into());
        }

        if self.headline_fonts.is_empty() || self.subheadline_fonts.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "text.fonts".to_string(),
                value: "empty candidate list".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Rounded/bold display fonts, preferring the faces the original artwork used
fn default_headline_fonts() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Supplemental/Avenir Next Rounded.ttc",
        "/System/Library/Fonts/Supplemental/Arial Rounded Bold.ttf",
        "/Library/Fonts/SF-Pro-Rounded-Bold.otf",
        "/System/Library/Fonts/SFNS.ttf",
        "/System/Library/Fonts/Supplemental/Avenir.ttc",
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Regular-weight fonts for the subheadline
fn default_subheadline_fonts() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Supplemental/Avenir Next.ttc",
        "/Library/Fonts/SF-Pro-Display-Regular.otf",
        "/System/Library/Fonts/SFNS.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Geometry of the arrow element inside the icon artwork
///
/// All ratios are fractions of the icon's width or height, floored to pixel
/// coordinates, so the same settings apply to every icon size in the set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Left edge of the arrow region (fraction of width)
    pub left_ratio: f64,

    /// Right edge of the arrow region (fraction of width)
    pub right_ratio: f64,

    /// Top edge of the current arrow position (fraction of height)
    pub top_ratio: f64,

    /// Bottom edge of the current arrow position (fraction of height)
    pub bottom_ratio: f64,

    /// Top edge of the arrow's new position (fraction of height)
    pub new_top_ratio: f64,

    /// Distance outside the region to sample patch colors from, in pixels
    pub sample_offset: u32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            left_ratio: 0.38,
            right_ratio: 0.62,
            top_ratio: 0.65,
            bottom_ratio: 0.92,
            new_top_ratio: 0.12,
            sample_offset: 15,
        }
    }
}

/// Icon arrow repositioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Icon file names to edit, relative to the assets directory
    pub names: Vec<String>,

    /// Arrow region geometry
    pub arrow: ArrowConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            names: vec![
                "icon.png".to_string(),
                "adaptive-icon.png".to_string(),
                "favicon.png".to_string(),
                "splash-icon.png".to_string(),
            ],
            arrow: ArrowConfig::default(),
        }
    }
}

impl IconConfig {
    fn validate(&self) -> Result<()> {
        let a = &self.arrow;

        if !(0.0..1.0).contains(&a.left_ratio) || a.right_ratio <= a.left_ratio || a.right_ratio > 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "icon.arrow.horizontal".to_string(),
                value: format!("{}-{}", a.left_ratio, a.right_ratio),
            }
            .into());
        }

        if !(0.0..1.0).contains(&a.top_ratio) || a.bottom_ratio <= a.top_ratio || a.bottom_ratio > 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "icon.arrow.vertical".to_string(),
                value: format!("{}-{}", a.top_ratio, a.bottom_ratio),
            }
            .into());
        }

        if !(0.0..1.0).contains(&a.new_top_ratio) {
            return Err(ConfigError::InvalidValue {
                key: "icon.arrow.new_top_ratio".to_string(),
                value: a.new_top_ratio.to_string(),
            }
            .into());
        }

        if self.names.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "icon.names".to_string(),
                value: "empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Parallel processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of worker threads for slide rendering
    pub threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}

impl ProcessingConfig {
    fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "processing.threads".to_string(),
                value: self.threads.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_slides_match_original_set() {
        let config = MockupConfig::default();
        assert_eq!(config.slides.len(), 7);
        assert_eq!(config.slides[0].suffix, "19.12.24");
        assert_eq!(config.slides[0].headline, "4 Ways to\nProgress");
        assert_eq!(config.slides[6].subheadline, "Track your progress");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original = Config::default();
        original.save_to_file(&file_path).unwrap();
        let loaded = Config::from_file(&file_path).unwrap();

        assert_eq!(original.mockup.canvas_width, loaded.mockup.canvas_width);
        assert_eq!(original.mockup.slides.len(), loaded.mockup.slides.len());
        assert_eq!(original.text.headline_size, loaded.text.headline_size);
        assert_eq!(original.icon.arrow.sample_offset, loaded.icon.arrow.sample_offset);
    }

    #[test]
    fn test_invalid_frame_ratio() {
        let mut config = Config::default();
        config.mockup.frame_height_ratio = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_arrow_range() {
        let mut config = Config::default();
        config.icon.arrow.left_ratio = 0.7;
        config.icon.arrow.right_ratio = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut config = Config::default();
        config.processing.threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::from_file("/nonexistent/config.toml");
        assert!(result.is_err());
    }
}
