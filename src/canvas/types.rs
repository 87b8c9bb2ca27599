use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{AssetError, Result};

/// A single RGBA working image
///
/// This is a thin wrapper around an RGBA image buffer that provides the
/// geometric operations the pipelines need: resize, crop, flip, alpha-aware
/// overlay and direct pixel access.
#[derive(Clone, Debug)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a canvas from an existing RGBA buffer
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Create a canvas filled with a solid color
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgba(color));
        Self { buffer }
    }

    /// Load an image from disk, converting to RGBA
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|_| AssetError::LoadFailed {
            path: path.display().to_string(),
        })?;

        Ok(Self { buffer: image.to_rgba8() })
    }

    /// Get the width of the canvas
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the canvas
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.buffer.put_pixel(x, y, Rgba(color));
    }

    /// Return a Lanczos3-resampled copy at the given dimensions
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self {
            buffer: imageops::resize(&self.buffer, width, height, FilterType::Lanczos3),
        }
    }

    /// Alpha-blend another canvas on top of this one at (x, y)
    ///
    /// Coordinates may be negative or extend past the edges; the overlay is
    /// clipped to this canvas.
    pub fn overlay(&mut self, top: &Canvas, x: i64, y: i64) {
        imageops::overlay(&mut self.buffer, &top.buffer, x, y);
    }

    /// Extract a copy of the given region
    pub fn crop(&self, region: &Region) -> Result<Self> {
        if region.right > self.width() || region.bottom > self.height() {
            return Err(AssetError::RegionOutOfBounds {
                left: region.left,
                top: region.top,
                right: region.right,
                bottom: region.bottom,
                width: self.width(),
                height: self.height(),
            }
            .into());
        }

        let view = imageops::crop_imm(
            &self.buffer,
            region.left,
            region.top,
            region.width(),
            region.height(),
        );
        Ok(Self { buffer: view.to_image() })
    }

    /// Return a vertically mirrored copy
    pub fn flipped_vertical(&self) -> Self {
        Self {
            buffer: imageops::flip_vertical(&self.buffer),
        }
    }

    /// Save the canvas as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.buffer.save(path).map_err(|_| AssetError::SaveFailed {
            path: path.display().to_string(),
        })?;
        Ok(())
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.buffer
    }
}

/// An integer pixel rectangle with exclusive right/bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    /// Create a region, rejecting empty or inverted rectangles
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if right <= left || bottom <= top {
            return Err(AssetError::InvalidRegion {
                details: format!("{left},{top}..{right},{bottom} is empty"),
            }
            .into());
        }

        Ok(Self { left, top, right, bottom })
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_region_rejects_empty() {
        assert!(Region::new(10, 10, 10, 20).is_err());
        assert!(Region::new(10, 10, 20, 10).is_err());
        assert!(Region::new(20, 10, 10, 20).is_err());
    }

    #[test]
    fn test_region_dimensions() {
        let region = Region::new(5, 10, 25, 40).unwrap();
        assert_eq!(region.width(), 20);
        assert_eq!(region.height(), 30);
    }

    #[test]
    fn test_filled_canvas() {
        let canvas = Canvas::filled(4, 3, [10, 20, 30, 255]);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.get_pixel(3, 2), [10, 20, 30, 255]);
    }

    #[test]
    fn test_crop_and_flip() {
        let mut canvas = Canvas::filled(10, 10, [0, 0, 0, 255]);
        canvas.set_pixel(3, 2, [255, 0, 0, 255]);

        let region = Region::new(2, 1, 6, 5).unwrap();
        let cropped = canvas.crop(&region).unwrap();
        assert_eq!(cropped.width(), 4);
        assert_eq!(cropped.height(), 4);
        assert_eq!(cropped.get_pixel(1, 1), [255, 0, 0, 255]);

        // Flipping mirrors rows: (1, 1) in a 4-row image lands on row 2
        let flipped = cropped.flipped_vertical();
        assert_eq!(flipped.get_pixel(1, 2), [255, 0, 0, 255]);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let canvas = Canvas::filled(10, 10, [0, 0, 0, 255]);
        let region = Region::new(5, 5, 15, 8).unwrap();
        assert!(canvas.crop(&region).is_err());
    }

    #[test]
    fn test_overlay_respects_alpha() {
        let mut bottom = Canvas::filled(4, 4, [0, 255, 0, 255]);
        let mut top = Canvas::filled(2, 2, [0, 0, 0, 0]);
        top.set_pixel(0, 0, [255, 0, 0, 255]);

        bottom.overlay(&top, 1, 1);

        // Opaque top pixel replaces, transparent ones leave the base intact
        assert_eq!(bottom.get_pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(bottom.get_pixel(2, 2), [0, 255, 0, 255]);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut canvas = Canvas::filled(8, 8, [1, 2, 3, 255]);
        canvas.set_pixel(4, 4, [200, 100, 50, 255]);
        canvas.save_png(&path).unwrap();

        let reloaded = Canvas::open(&path).unwrap();
        assert_eq!(reloaded.get_pixel(4, 4), [200, 100, 50, 255]);
        assert_eq!(reloaded.get_pixel(0, 0), [1, 2, 3, 255]);
    }

    #[test]
    fn test_open_missing_file() {
        assert!(Canvas::open("/nonexistent/image.png").is_err());
    }
}
