//! Kernel metrics over decoded pixel buffers.
//!
//! Every function here is a pure, deterministic map from its inputs to a
//! `{score, flag}` record; nothing is cached between calls. The blur, noise
//! and motion kernels evaluate interior pixels only (the 1-px border carries
//! no 3×3 neighbourhood) and expect images at least 3×3 — the pipeline
//! rejects smaller inputs up front.
//!
//! Two grayscale conversions coexist and both are load-bearing:
//! - *intensity* `(R+G+B)/3` feeds blur, motion, glare, noise and banding;
//! - *luminance* `0.299R + 0.587G + 0.114B` feeds exposure, contrast and
//!   colour dominance.

pub mod banding;
pub mod blur;
pub mod exposure;
pub mod glare;
pub mod intensity;
pub mod motion;
pub mod noise;
pub mod stats;

pub use banding::{banding, BandingMetric};
pub use blur::{analyze_blur, BlurAnalysis};
pub use exposure::{
    color_dominance, contrast_metric, exposure_metric, luminance_stats, ColorDominanceMetric,
    ContrastMetric, ExposureMetric, LuminanceStats,
};
pub use glare::{glare, GlareMetric};
pub use intensity::intensity_from_rgb;
pub use motion::{motion_blur, MotionBlurMetric};
pub use noise::{noise, NoiseMetric};

/// Additive guard applied to every ratio denominator so uniform images stay
/// finite. Calibrated thresholds assume exactly this value.
pub(crate) const EPS: f64 = 1e-5;

/// Maximum squared sample value (255²), the normaliser of the variance proxy.
pub(crate) const MAX_SQ_SAMPLE: f64 = 65025.0;

use crate::image::ImageF64;

/// Global-variance proxy score, historically labelled "Brisque".
///
/// `variance(intensity) / 65025 * 100` — a simplified stand-in, not the
/// natural-scene-statistics BRISQUE. Downstream thresholds are calibrated
/// against this formula; keep it as is.
pub fn variance_proxy_score(intensity: &ImageF64) -> f64 {
    stats::variance(&intensity.data) / MAX_SQ_SAMPLE * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_proxy_is_zero_on_uniform_input() {
        let mut img = ImageF64::new(8, 8);
        img.data.fill(127.0);
        assert_eq!(variance_proxy_score(&img), 0.0);
    }

    #[test]
    fn variance_proxy_scales_with_spread() {
        // Half 0, half 255: variance = 255²/4, score = 25.
        let mut img = ImageF64::new(8, 2);
        for x in 0..8 {
            img.set(x, 0, 0.0);
            img.set(x, 1, 255.0);
        }
        let score = variance_proxy_score(&img);
        assert!((score - 25.0).abs() < 1e-9, "score={score}");
    }
}
