use thiserror::Error;

/// Main error type for the Mockup-Forge library
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Text rendering error: {0}")]
    Text(#[from] TextError),

    #[error("Mockup composition error: {0}")]
    Mockup(#[from] MockupError),

    #[error("Icon editing error: {0}")]
    Icon(#[from] IconError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading, saving or manipulating raster assets
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to load image: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save image: {path}")]
    SaveFailed { path: String },

    #[error("Invalid region: {details}")]
    InvalidRegion { details: String },

    #[error("Region {left},{top}..{right},{bottom} exceeds image bounds {width}x{height}")]
    RegionOutOfBounds {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },
}

/// Font loading and text layout errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("No usable font among {candidates} candidate path(s)")]
    NoUsableFont { candidates: usize },

    #[error("Failed to parse font file: {path}")]
    FontParseFailed { path: String },
}

/// Errors specific to store-listing mockup composition
#[derive(Error, Debug)]
pub enum MockupError {
    #[error("No screenshots found in directory: {path}")]
    NoScreenshotsFound { path: String },

    #[error("No configured slide matched a screenshot in: {path}")]
    NoSlidesMatched { path: String },

    #[error("Output generation failed: {reason}")]
    OutputFailed { reason: String },
}

/// Errors specific to icon arrow repositioning
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Image {width}x{height} too small for arrow region")]
    DegenerateRegion { width: u32, height: u32 },

    #[error("No icons processed in directory: {path}")]
    NothingProcessed { path: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using ForgeError
pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Asset(AssetError::LoadFailed { path }) => {
                format!("Could not load image '{}'. Please check the file exists and is a supported format.", path)
            }
            Self::Mockup(MockupError::NoScreenshotsFound { path }) => {
                format!("No PNG screenshots found in '{}'.", path)
            }
            Self::Text(TextError::NoUsableFont { .. }) => {
                "No usable font found. Set explicit font paths in the configuration file.".to_string()
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
