//! Row/column banding detector.
//!
//! Stripe artefacts concentrate pixel variance into per-row (or per-column)
//! mean structure. The score is the variance of the row/column means around
//! the global mean, relative to the total pixel variance: close to 1 when
//! stripes explain the image, close to 0 for unstructured content.
use crate::image::{ImageF64, ImageView};
use crate::metrics::{stats, EPS};

#[derive(Clone, Copy, Debug)]
pub struct BandingMetric {
    /// `max(row_var, col_var) / (pixel_var + ε)`.
    pub score: f64,
    pub has_banding: bool,
}

pub fn banding(intensity: &ImageF64, threshold: f64) -> BandingMetric {
    let (w, h) = (intensity.w, intensity.h);
    debug_assert!(w > 0 && h > 0);

    let global_mean = stats::mean(&intensity.data);
    let global_var = stats::variance(&intensity.data) + EPS;

    let mut col_sums = vec![0.0f64; w];
    let mut row_var = 0.0;
    for y in 0..h {
        let row = intensity.row(y);
        let mut sum = 0.0;
        for (x, &v) in row.iter().enumerate() {
            sum += v;
            col_sums[x] += v;
        }
        let dev = sum / w as f64 - global_mean;
        row_var += dev * dev;
    }
    row_var /= h as f64;

    let col_var = col_sums
        .iter()
        .map(|&s| {
            let dev = s / h as f64 - global_mean;
            dev * dev
        })
        .sum::<f64>()
        / w as f64;

    let score = row_var.max(col_var) / global_var;
    BandingMetric {
        score,
        has_banding: score > threshold,
    }
}
