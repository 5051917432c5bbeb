//! Reduced-resolution processing support.
//!
//! When the configured processing scale is below 1.0 the checker analyses a
//! prefiltered, resampled copy of the source: a separable 5-tap Gaussian per
//! RGB channel followed by nearest decimation. Only the heatmap and region
//! outputs are mapped back to full resolution — scalar scores stay at the
//! reduced resolution by design.
use crate::image::{GrayImageU8, ImageView, ImageViewMut, RgbBufferU8, RgbImageU8};
use crate::regions::Region;

/// Normalised 5-tap Gaussian `[1, 4, 6, 4, 1] / 16` used as the prefilter.
const GAUSSIAN_5TAP: [f64; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Target dimensions for a given scale. Clamped to at least 3×3 so the 3×3
/// kernels keep an interior on any input that passed validation.
pub fn scaled_dimensions(width: usize, height: usize, scale: f64) -> (usize, usize) {
    let dim = |d: usize| -> usize {
        let scaled = (d as f64 * scale).round() as usize;
        scaled.clamp(3, d.max(3))
    };
    (dim(width), dim(height))
}

/// Blur and resample an RGB image down to `nw × nh`.
pub fn downsample_rgb(src: &RgbImageU8<'_>, nw: usize, nh: usize) -> RgbBufferU8 {
    debug_assert!(nw <= src.w && nh <= src.h);
    let (w, h) = (src.w, src.h);

    let mut out = RgbBufferU8::zeroed(nw, nh);
    let mut channel = vec![0.0f64; w * h];
    let mut tmp = vec![0.0f64; w * h];

    for c in 0..3 {
        for y in 0..h {
            let row = src.row(y);
            for x in 0..w {
                channel[y * w + x] = row[3 * x + c] as f64;
            }
        }
        blur_separable(&mut channel, &mut tmp, w, h);

        for y in 0..nh {
            let sy = ((y * h) / nh).min(h - 1);
            let dst = out.row_mut(y);
            for x in 0..nw {
                let sx = ((x * w) / nw).min(w - 1);
                dst[3 * x + c] = channel[sy * w + sx].clamp(0.0, 255.0).round() as u8;
            }
        }
    }
    out
}

/// In-place separable convolution with edge clamping.
fn blur_separable(data: &mut [f64], tmp: &mut [f64], w: usize, h: usize) {
    let radius = GAUSSIAN_5TAP.len() / 2;
    // Horizontal pass into tmp.
    for y in 0..h {
        let row = &data[y * w..(y + 1) * w];
        let dst = &mut tmp[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sx = (x + k).saturating_sub(radius).min(w - 1);
                acc += tap * row[sx];
            }
            dst[x] = acc;
        }
    }
    // Vertical pass back into data.
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sy = (y + k).saturating_sub(radius).min(h - 1);
                acc += tap * tmp[sy * w + x];
            }
            data[y * w + x] = acc;
        }
    }
}

/// Nearest-neighbour upsampling of a mask/heatmap buffer.
pub fn upsample_gray(src: &GrayImageU8, nw: usize, nh: usize) -> GrayImageU8 {
    let mut out = GrayImageU8::new(nw, nh);
    if src.w == 0 || src.h == 0 {
        return out;
    }
    for y in 0..nh {
        let sy = ((y * src.h) / nh).min(src.h - 1);
        let src_row = src.row(sy);
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let sx = ((x * src.w) / nw).min(src.w - 1);
            *px = src_row[sx];
        }
    }
    out
}

/// Per-axis factors lifting reduced-resolution coordinates to full resolution.
#[derive(Clone, Copy, Debug)]
pub struct ScaleToFull {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleToFull {
    pub fn from_dimensions(
        scaled_w: usize,
        scaled_h: usize,
        full_w: usize,
        full_h: usize,
    ) -> Self {
        let sx = if scaled_w > 0 {
            full_w as f64 / scaled_w as f64
        } else {
            1.0
        };
        let sy = if scaled_h > 0 {
            full_h as f64 / scaled_h as f64
        } else {
            1.0
        };
        Self { sx, sy }
    }
}

/// Lift a region box to full resolution, rounding each edge to nearest
/// independently and clamping into `[0, full_w] × [0, full_h]` while keeping
/// the box non-empty.
pub fn rescale_region(region: &Region, scale: &ScaleToFull, full_w: usize, full_h: usize) -> Region {
    let left = ((region.left as f64 * scale.sx).round() as usize).min(full_w.saturating_sub(1));
    let top = ((region.top as f64 * scale.sy).round() as usize).min(full_h.saturating_sub(1));
    let right = ((region.right as f64 * scale.sx).round() as usize)
        .min(full_w)
        .max(left + 1);
    let bottom = ((region.bottom as f64 * scale.sy).round() as usize)
        .min(full_h)
        .max(top + 1);
    Region {
        left,
        top,
        right,
        bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_dimensions_round_and_clamp() {
        assert_eq!(scaled_dimensions(200, 100, 0.5), (100, 50));
        assert_eq!(scaled_dimensions(200, 100, 1.0), (200, 100));
        // 0.1 of a tiny image never drops below the kernel minimum.
        assert_eq!(scaled_dimensions(20, 10, 0.1), (3, 3));
    }

    #[test]
    fn downsample_preserves_solid_color() {
        let data: Vec<u8> = [17u8, 130, 240].iter().copied().cycle().take(3 * 40 * 40).collect();
        let src = RgbImageU8 {
            w: 40,
            h: 40,
            stride: 120,
            data: &data,
        };
        let down = downsample_rgb(&src, 20, 20);
        assert_eq!(down.width(), 20);
        let view = down.as_view();
        assert_eq!(view.get(0, 0), [17, 130, 240]);
        assert_eq!(view.get(19, 19), [17, 130, 240]);
        assert_eq!(view.get(10, 5), [17, 130, 240]);
    }

    #[test]
    fn upsample_doubles_mask_pixels() {
        let mut mask = GrayImageU8::new(4, 4);
        mask.set(1, 1, 255);
        let up = upsample_gray(&mask, 8, 8);
        assert_eq!(up.get(2, 2), 255);
        assert_eq!(up.get(3, 3), 255);
        assert_eq!(up.get(4, 4), 0);
        assert_eq!(up.get(1, 2), 0);
    }

    #[test]
    fn rescale_region_rounds_each_edge() {
        let scale = ScaleToFull::from_dimensions(100, 50, 201, 101);
        let region = Region {
            left: 10,
            top: 5,
            right: 20,
            bottom: 15,
        };
        let full = rescale_region(&region, &scale, 201, 101);
        assert_eq!(full.left, 20); // 10 * 2.01 = 20.1
        assert_eq!(full.top, 10); // 5 * 2.02 = 10.1
        assert_eq!(full.right, 40); // 20 * 2.01 = 40.2
        assert_eq!(full.bottom, 30); // 15 * 2.02 = 30.3
        assert!(full.right > full.left && full.bottom > full.top);
    }

    #[test]
    fn rescale_region_never_escapes_the_image() {
        let scale = ScaleToFull::from_dimensions(50, 50, 100, 100);
        let region = Region {
            left: 48,
            top: 49,
            right: 50,
            bottom: 50,
        };
        let full = rescale_region(&region, &scale, 100, 100);
        assert!(full.right <= 100 && full.bottom <= 100);
        assert!(full.right > full.left && full.bottom > full.top);
    }
}
