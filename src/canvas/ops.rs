//! Direct pixel operations used by the pipelines

use crate::canvas::{Canvas, Region};
use crate::error::{AssetError, Result};

/// Fill a rounded rectangle with a solid color
///
/// `right` and `bottom` are exclusive. Coordinates may extend past the canvas;
/// the fill is clipped. Pixels in the corner squares that fall outside the
/// quarter-circle of the given radius are left untouched.
pub fn fill_rounded_rect(
    canvas: &mut Canvas,
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
    radius: i64,
    color: [u8; 4],
) {
    let radius = radius.max(0);

    // Corner circle centers in rectangle coordinates
    let cx_left = left + radius;
    let cx_right = right - 1 - radius;
    let cy_top = top + radius;
    let cy_bottom = bottom - 1 - radius;

    let x0 = left.max(0);
    let y0 = top.max(0);
    let x1 = right.min(canvas.width() as i64);
    let y1 = bottom.min(canvas.height() as i64);

    for y in y0..y1 {
        let dy = if y < cy_top {
            cy_top - y
        } else if y > cy_bottom {
            y - cy_bottom
        } else {
            0
        };

        for x in x0..x1 {
            let dx = if x < cx_left {
                cx_left - x
            } else if x > cx_right {
                x - cx_right
            } else {
                0
            };

            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            canvas.set_pixel(x as u32, y as u32, color);
        }
    }
}

/// Patch a region with a horizontal blend of its surroundings
///
/// For every row, one color is sampled `sample_offset` px left of the region
/// and one `sample_offset` px right of it (clamped to the image edges). The
/// row is then filled by per-channel linear interpolation between the two
/// samples, t running 0..1 across the region width. All four RGBA channels
/// interpolate. Samples are taken before any fill writes, so the patch never
/// feeds back into itself.
pub fn blend_fill_horizontal(canvas: &mut Canvas, region: &Region, sample_offset: u32) -> Result<()> {
    if region.right > canvas.width() || region.bottom > canvas.height() {
        return Err(AssetError::RegionOutOfBounds {
            left: region.left,
            top: region.top,
            right: region.right,
            bottom: region.bottom,
            width: canvas.width(),
            height: canvas.height(),
        }
        .into());
    }

    let left_sample_x = region.left.saturating_sub(sample_offset);
    let right_sample_x = (region.right + sample_offset).min(canvas.width() - 1);
    let denom = region.width() as f64;

    for y in region.top..region.bottom {
        let left_color = canvas.get_pixel(left_sample_x, y);
        let right_color = canvas.get_pixel(right_sample_x, y);

        for x in region.left..region.right {
            let t = (x - region.left) as f64 / denom;

            let mut blended = [0u8; 4];
            for c in 0..4 {
                blended[c] = (left_color[c] as f64 * (1.0 - t) + right_color[c] as f64 * t) as u8;
            }

            canvas.set_pixel(x, y, blended);
        }
    }

    Ok(())
}
