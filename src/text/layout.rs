//! Measurement and drawing of the headline/subheadline block
//!
//! The spacing arithmetic mirrors the artwork this tool reproduces: every
//! headline line is followed by `line_gap`, the subheadline sits
//! `headline_gap` below the last headline baseline advance, and all lines are
//! horizontally centered on the canvas.

use ab_glyph::PxScale;
use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::canvas::Canvas;
use crate::config::TextConfig;
use crate::text::FontLibrary;

/// Measured pixel size of one rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSize {
    pub width: u32,
    pub height: u32,
}

/// Measured geometry of a complete text block
#[derive(Debug, Clone)]
pub struct TextBlockMetrics {
    /// Per-line sizes of the headline, in order
    pub line_sizes: Vec<LineSize>,

    /// Size of the subheadline
    pub subheadline_size: LineSize,

    /// Headline block height: sum of line heights plus a gap per line
    pub headline_height: i32,

    /// Full block height including the subheadline and its gap
    pub total_height: i32,

    /// Widest line across headline and subheadline
    pub max_width: u32,
}

impl TextBlockMetrics {
    /// Compute block geometry from already-measured line sizes
    pub fn from_sizes(
        line_sizes: Vec<LineSize>,
        subheadline_size: LineSize,
        line_gap: i32,
        headline_gap: i32,
    ) -> Self {
        let headline_height: i32 = line_sizes
            .iter()
            .map(|size| size.height as i32 + line_gap)
            .sum();

        let total_height = headline_height + headline_gap + subheadline_size.height as i32;

        let max_width = line_sizes
            .iter()
            .map(|size| size.width)
            .chain(std::iter::once(subheadline_size.width))
            .max()
            .unwrap_or(0);

        Self {
            line_sizes,
            subheadline_size,
            headline_height,
            total_height,
            max_width,
        }
    }
}

/// Measure a headline (split on newlines) and subheadline
pub fn measure(
    fonts: &FontLibrary,
    config: &TextConfig,
    headline: &str,
    subheadline: &str,
) -> TextBlockMetrics {
    let headline_scale = PxScale::from(config.headline_size);
    let subheadline_scale = PxScale::from(config.subheadline_size);

    let line_sizes = headline
        .split('\n')
        .map(|line| {
            let (width, height) = text_size(headline_scale, fonts.headline(), line);
            LineSize { width, height }
        })
        .collect();

    let (width, height) = text_size(subheadline_scale, fonts.subheadline(), subheadline);

    TextBlockMetrics::from_sizes(
        line_sizes,
        LineSize { width, height },
        config.line_gap,
        config.headline_gap,
    )
}

/// Draw the measured block onto the canvas, each line centered horizontally
pub fn draw(
    canvas: &mut Canvas,
    fonts: &FontLibrary,
    config: &TextConfig,
    headline: &str,
    subheadline: &str,
    metrics: &TextBlockMetrics,
    start_y: i32,
) {
    let canvas_width = canvas.width() as i32;
    let headline_scale = PxScale::from(config.headline_size);
    let subheadline_scale = PxScale::from(config.subheadline_size);

    let [r, g, b] = config.headline_color;
    let headline_color = Rgba([r, g, b, 255]);
    let [r, g, b] = config.subheadline_color;
    let subheadline_color = Rgba([r, g, b, 255]);

    let mut line_y = start_y;
    for (line, size) in headline.split('\n').zip(&metrics.line_sizes) {
        let x = (canvas_width - size.width as i32) / 2;
        draw_text_mut(
            canvas.as_image_mut(),
            headline_color,
            x,
            line_y,
            headline_scale,
            fonts.headline(),
            line,
        );
        line_y += size.height as i32 + config.line_gap;
    }

    // line_y already carries one trailing line_gap
    let subheadline_y = line_y + config.headline_gap - config.line_gap;
    let x = (canvas_width - metrics.subheadline_size.width as i32) / 2;
    draw_text_mut(
        canvas.as_image_mut(),
        subheadline_color,
        x,
        subheadline_y,
        subheadline_scale,
        fonts.subheadline(),
        subheadline,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_metrics_arithmetic() {
        let lines = vec![
            LineSize { width: 100, height: 50 },
            LineSize { width: 80, height: 40 },
        ];
        let sub = LineSize { width: 120, height: 20 };

        let metrics = TextBlockMetrics::from_sizes(lines, sub, 12, 55);

        // (50 + 12) + (40 + 12)
        assert_eq!(metrics.headline_height, 114);
        // 114 + 55 + 20
        assert_eq!(metrics.total_height, 189);
        assert_eq!(metrics.max_width, 120);
    }

    #[test]
    fn test_block_metrics_single_line() {
        let lines = vec![LineSize { width: 300, height: 90 }];
        let sub = LineSize { width: 150, height: 30 };

        let metrics = TextBlockMetrics::from_sizes(lines, sub, 12, 55);

        assert_eq!(metrics.headline_height, 102);
        assert_eq!(metrics.total_height, 187);
        assert_eq!(metrics.max_width, 300);
    }
}
