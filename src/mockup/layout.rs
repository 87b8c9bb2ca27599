use crate::config::MockupConfig;
use crate::error::{AssetError, Result};

/// Placement of the phone frame and the screenshot inside it
///
/// All ratio scaling truncates to whole pixels and centering uses integer
/// division, reproducing the artwork's original placement exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLayout {
    /// Scaled frame dimensions
    pub frame_size: (u32, u32),

    /// Frame top-left position on the canvas
    pub frame_pos: (i64, i64),

    /// Scaled screenshot dimensions
    pub screen_size: (u32, u32),

    /// Screenshot top-left position on the canvas
    pub screen_pos: (i64, i64),
}

impl SlideLayout {
    /// Compute the layout for a frame image of the given dimensions
    ///
    /// The frame is scaled to `frame_height_ratio` of the canvas height,
    /// centered horizontally and pinned `frame_bottom_margin` px above the
    /// bottom edge. The screenshot is scaled relative to the frame and offset
    /// `screen_top_ratio` down from the frame's top so the bezel overlaps it.
    pub fn compute(config: &MockupConfig, frame_width: u32, frame_height: u32) -> Result<Self> {
        if frame_width == 0 || frame_height == 0 {
            return Err(AssetError::InvalidRegion {
                details: "zero-sized frame image".to_string(),
            }
            .into());
        }

        let max_frame_height = (config.canvas_height as f64 * config.frame_height_ratio) as u32;
        let scale = max_frame_height as f64 / frame_height as f64;

        let scaled_width = (frame_width as f64 * scale) as u32;
        let scaled_height = (frame_height as f64 * scale) as u32;
        if scaled_width == 0 || scaled_height == 0 {
            return Err(AssetError::InvalidRegion {
                details: format!("frame scales to {}x{}", scaled_width, scaled_height),
            }
            .into());
        }

        let frame_x = (config.canvas_width as i64 - scaled_width as i64) / 2;
        let frame_y =
            config.canvas_height as i64 - scaled_height as i64 - config.frame_bottom_margin as i64;

        let screen_width = (scaled_width as f64 * config.screen_width_ratio) as u32;
        let screen_height = (scaled_height as f64 * config.screen_height_ratio) as u32;

        let screen_x = frame_x + (scaled_width as i64 - screen_width as i64) / 2;
        let screen_y = frame_y + (scaled_height as f64 * config.screen_top_ratio) as i64;

        Ok(Self {
            frame_size: (scaled_width, scaled_height),
            frame_pos: (frame_x, frame_y),
            screen_size: (screen_width, screen_height),
            screen_pos: (screen_x, screen_y),
        })
    }

    /// Height of the text area: everything above the frame's top edge
    pub fn text_area_height(&self) -> i64 {
        self.frame_pos.1
    }
}
