//! Laplacian blur analysis.
//!
//! Applies the 5-point stencil `N + S + E + W - 4·C` at every interior pixel
//! and scores sharpness as the mean squared response. Low scores mean little
//! edge energy, i.e. a blurry image.
//!
//! The response plane is kept in the returned [`BlurAnalysis`] because three
//! consumers must agree on it: the scalar score, the magnitude heatmap and
//! the blurry-region mask. It is computed once per check, never per consumer.
use crate::image::{ImageF64, ImageView};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shared outcome of the Laplacian pass.
#[derive(Clone, Debug)]
pub struct BlurAnalysis {
    /// Laplacian response at original size; the 1-px border stays zero.
    pub laplacian: ImageF64,
    /// Mean of squared responses over interior pixels.
    pub score: f64,
    pub is_blurry: bool,
}

/// Run the Laplacian pass over an intensity plane of at least 3×3 pixels.
pub fn analyze_blur(intensity: &ImageF64, threshold: f64) -> BlurAnalysis {
    let (w, h) = (intensity.w, intensity.h);
    debug_assert!(w >= 3 && h >= 3);

    let mut laplacian = ImageF64::new(w, h);

    let interior = &mut laplacian.data[w..w * (h - 1)];
    #[cfg(feature = "parallel")]
    {
        interior
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(i, dst)| {
                let y = i + 1;
                laplacian_row(
                    intensity.row(y - 1),
                    intensity.row(y),
                    intensity.row(y + 1),
                    dst,
                );
            });
    }
    #[cfg(not(feature = "parallel"))]
    for (i, dst) in interior.chunks_mut(w).enumerate() {
        let y = i + 1;
        laplacian_row(
            intensity.row(y - 1),
            intensity.row(y),
            intensity.row(y + 1),
            dst,
        );
    }

    let sum_sq = interior_sum_sq(&laplacian);
    let count = ((w - 2) * (h - 2)) as f64;
    let score = sum_sq / count;

    BlurAnalysis {
        laplacian,
        score,
        is_blurry: score < threshold,
    }
}

#[inline]
fn laplacian_row(above: &[f64], row: &[f64], below: &[f64], dst: &mut [f64]) {
    let w = row.len();
    for x in 1..w - 1 {
        dst[x] = above[x] + below[x] + row[x - 1] + row[x + 1] - 4.0 * row[x];
    }
}

fn interior_sum_sq(lap: &ImageF64) -> f64 {
    let (w, h) = (lap.w, lap.h);
    let rows = &lap.data[w..w * (h - 1)];
    #[cfg(feature = "parallel")]
    {
        rows.par_chunks(w)
            .map(|row| row[1..w - 1].iter().map(|&v| v * v).sum::<f64>())
            .sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        rows.chunks(w)
            .map(|row| row[1..w - 1].iter().map(|&v| v * v).sum::<f64>())
            .sum()
    }
}
