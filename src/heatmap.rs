//! Threshold masks and diagnostic heatmaps.
//!
//! Blur has two distinct renderings of the shared Laplacian plane:
//! - the *heatmap* encodes magnitude (`clamp(|lap|, 0, 255)`), high values
//!   meaning strong edge energy;
//! - the *mask* marks blurry pixels (`255` where `lap² < threshold`), the
//!   opposite polarity. Region extraction runs on the mask.
//!
//! Glare needs only the binary brightness map; heatmap and mask are the same
//! buffer. Border pixels of the blur buffers stay zero (no 3×3 support).
use crate::image::{GrayImageU8, ImageF64, ImageView, ImageViewMut};

/// Magnitude heatmap of the Laplacian response.
pub fn blur_heatmap(laplacian: &ImageF64) -> GrayImageU8 {
    let (w, h) = (laplacian.w, laplacian.h);
    let mut map = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return map;
    }
    for y in 1..h - 1 {
        let src = laplacian.row(y);
        let dst = map.row_mut(y);
        for x in 1..w - 1 {
            dst[x] = src[x].abs().clamp(0.0, 255.0) as u8;
        }
    }
    map
}

/// Binary mask of blurry pixels: `255` where the squared Laplacian falls
/// below the blur threshold.
pub fn blur_mask(laplacian: &ImageF64, blur_threshold: f64) -> GrayImageU8 {
    let (w, h) = (laplacian.w, laplacian.h);
    let mut mask = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return mask;
    }
    for y in 1..h - 1 {
        let src = laplacian.row(y);
        let dst = mask.row_mut(y);
        for x in 1..w - 1 {
            if src[x] * src[x] < blur_threshold {
                dst[x] = 255;
            }
        }
    }
    mask
}

/// Binary brightness map; doubles as the glare heatmap and the glare mask.
pub fn glare_map(intensity: &ImageF64, bright_threshold: f64) -> GrayImageU8 {
    let mut map = GrayImageU8::new(intensity.w, intensity.h);
    for (dst, &v) in map.data.iter_mut().zip(intensity.data.iter()) {
        if v >= bright_threshold {
            *dst = 255;
        }
    }
    map
}
