//! Exposure, contrast and colour dominance over the raw RGB samples.
//!
//! These three checks share one pass that accumulates luminance
//! (`0.299R + 0.587G + 0.114B`), its square and the per-channel sums; each
//! metric is then derived from the collected [`LuminanceStats`].
use crate::image::RgbImageU8;
use crate::metrics::EPS;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregates collected in a single pass over the pixels.
#[derive(Clone, Copy, Debug)]
pub struct LuminanceStats {
    /// Mean luminance over all pixels.
    pub mean: f64,
    /// Standard deviation of luminance (`sqrt(max(variance, 0))`).
    pub stddev: f64,
    /// Mean of each channel, RGB order.
    pub channel_means: [f64; 3],
}

#[derive(Clone, Copy, Debug)]
pub struct ExposureMetric {
    pub exposure: f64,
    pub is_well_exposed: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ContrastMetric {
    pub contrast: f64,
    pub has_low_contrast: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ColorDominanceMetric {
    /// Dominant channel mean over the average channel mean.
    pub ratio: f64,
    pub has_color_dominance: bool,
}

#[derive(Clone, Copy, Default)]
struct RowAccum {
    luma: f64,
    luma_sq: f64,
    rgb: [f64; 3],
}

impl RowAccum {
    fn combine(self, other: RowAccum) -> RowAccum {
        RowAccum {
            luma: self.luma + other.luma,
            luma_sq: self.luma_sq + other.luma_sq,
            rgb: [
                self.rgb[0] + other.rgb[0],
                self.rgb[1] + other.rgb[1],
                self.rgb[2] + other.rgb[2],
            ],
        }
    }
}

fn accumulate_row(src: &[u8]) -> RowAccum {
    let mut acc = RowAccum::default();
    for px in src.chunks_exact(3) {
        let (r, g, b) = (px[0] as f64, px[1] as f64, px[2] as f64);
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        acc.luma += luma;
        acc.luma_sq += luma * luma;
        acc.rgb[0] += r;
        acc.rgb[1] += g;
        acc.rgb[2] += b;
    }
    acc
}

/// One pass over the image collecting the shared aggregates.
pub fn luminance_stats(rgb: &RgbImageU8<'_>) -> LuminanceStats {
    let acc = {
        #[cfg(feature = "parallel")]
        {
            (0..rgb.h)
                .into_par_iter()
                .map(|y| accumulate_row(rgb.row(y)))
                .reduce(RowAccum::default, RowAccum::combine)
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..rgb.h)
                .map(|y| accumulate_row(rgb.row(y)))
                .fold(RowAccum::default(), RowAccum::combine)
        }
    };

    let count = (rgb.w * rgb.h) as f64;
    let mean = acc.luma / count;
    let variance = acc.luma_sq / count - mean * mean;
    LuminanceStats {
        mean,
        stddev: variance.max(0.0).sqrt(),
        channel_means: [
            acc.rgb[0] / count,
            acc.rgb[1] / count,
            acc.rgb[2] / count,
        ],
    }
}

pub fn exposure_metric(stats: &LuminanceStats, min: f64, max: f64) -> ExposureMetric {
    ExposureMetric {
        exposure: stats.mean,
        is_well_exposed: stats.mean >= min && stats.mean <= max,
    }
}

pub fn contrast_metric(stats: &LuminanceStats, min: f64) -> ContrastMetric {
    ContrastMetric {
        contrast: stats.stddev,
        has_low_contrast: stats.stddev < min,
    }
}

pub fn color_dominance(stats: &LuminanceStats, threshold: f64) -> ColorDominanceMetric {
    let [r, g, b] = stats.channel_means;
    let avg = (r + g + b) / 3.0;
    let ratio = r.max(g).max(b) / (avg + EPS);
    ColorDominanceMetric {
        ratio,
        has_color_dominance: ratio > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, color: [u8; 3]) -> Vec<u8> {
        color.iter().copied().cycle().take(3 * w * h).collect()
    }

    #[test]
    fn solid_gray_stats() {
        let data = solid(8, 8, [120, 120, 120]);
        let rgb = RgbImageU8 {
            w: 8,
            h: 8,
            stride: 24,
            data: &data,
        };
        let stats = luminance_stats(&rgb);
        assert!((stats.mean - 120.0).abs() < 1e-9);
        assert!(stats.stddev.abs() < 1e-6);
        assert!(exposure_metric(&stats, 80.0, 180.0).is_well_exposed);
        assert!(contrast_metric(&stats, 30.0).has_low_contrast);
    }

    #[test]
    fn pure_red_dominance_ratio_is_three() {
        let data = solid(8, 8, [255, 0, 0]);
        let rgb = RgbImageU8 {
            w: 8,
            h: 8,
            stride: 24,
            data: &data,
        };
        let stats = luminance_stats(&rgb);
        let metric = color_dominance(&stats, 1.5);
        assert!((metric.ratio - 3.0).abs() < 1e-3, "ratio={}", metric.ratio);
        assert!(metric.has_color_dominance);
    }

    #[test]
    fn balanced_channels_do_not_flag() {
        let data = solid(4, 4, [10, 200, 90]);
        let rgb = RgbImageU8 {
            w: 4,
            h: 4,
            stride: 12,
            data: &data,
        };
        let stats = luminance_stats(&rgb);
        let metric = color_dominance(&stats, 2.1);
        // 200 / 100 = 2.0, under the configured threshold.
        assert!((metric.ratio - 2.0).abs() < 1e-3);
        assert!(!metric.has_color_dominance);
    }
}
