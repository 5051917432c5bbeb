//! Threshold configuration for the quality checks.
//!
//! One immutable instance per check invocation; defaults match the
//! calibration of the historic service. All fields can be overridden from
//! JSON (tool configs, HTTP form bindings) via serde.
use serde::Deserialize;

/// Thresholds and toggles consumed by [`DocumentChecker`].
///
/// [`DocumentChecker`]: crate::checker::DocumentChecker
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct QualitySettings {
    /// Maximum allowed variance-proxy ("Brisque") score.
    pub brisque_max: f64,
    /// Minimum Laplacian score to count as sharp.
    pub blur_threshold: f64,
    /// Intensity at or above which a pixel counts as glare.
    pub bright_threshold: f64,
    /// Glare pixel count above which the image is flagged.
    pub area_threshold: usize,
    /// Acceptable mean-luminance band, lower bound.
    pub exposure_min: f64,
    /// Acceptable mean-luminance band, upper bound.
    pub exposure_max: f64,
    /// Minimum luminance standard deviation.
    pub contrast_min: f64,
    /// Maximum dominant-channel/average ratio.
    pub dominance_threshold: f64,
    /// Maximum local-variance noise score.
    pub noise_threshold: f64,
    /// Maximum directional gradient ratio.
    pub motion_blur_threshold: f64,
    /// Maximum row/column variance share.
    pub banding_threshold: f64,
    /// Produce heatmap buffers and region boxes.
    pub generate_heatmaps: bool,
    /// Downsample factor applied before analysis. Values outside
    /// `[0.1, 1.0]` are clamped, not rejected; `1.0` disables downsampling.
    pub processing_scale: f64,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            brisque_max: 50.0,
            blur_threshold: 100.0,
            bright_threshold: 240.0,
            area_threshold: 500,
            exposure_min: 80.0,
            exposure_max: 180.0,
            contrast_min: 30.0,
            dominance_threshold: 1.5,
            noise_threshold: 500.0,
            motion_blur_threshold: 3.0,
            banding_threshold: 0.5,
            generate_heatmaps: false,
            processing_scale: 1.0,
        }
    }
}

impl QualitySettings {
    /// The effective processing scale after the documented clamp.
    pub fn clamped_scale(&self) -> f64 {
        self.processing_scale.clamp(0.1, 1.0)
    }
}
