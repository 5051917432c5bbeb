//! Pipeline driving a full document quality check end-to-end.
//!
//! The [`DocumentChecker`] exposes a simple API: feed a decoded RGB buffer
//! and get every metric plus the aggregate verdict. Internally it runs
//! intensity extraction, the nine scalar kernels, and — when requested — the
//! mask/heatmap stage with connected-component region extraction, mapping
//! the results back to full resolution if a reduced processing scale was
//! configured.
//!
//! Typical usage:
//! ```no_run
//! use doc_quality::{DocumentChecker, QualitySettings};
//! use doc_quality::image::RgbImageU8;
//!
//! # fn example(rgb: RgbImageU8) {
//! let checker = DocumentChecker::new(QualitySettings::default());
//! match checker.check(rgb) {
//!     Ok(report) => println!("valid: {}", report.is_valid_document),
//!     Err(err) => eprintln!("rejected: {err}"),
//! }
//! # }
//! ```
use super::settings::QualitySettings;
use crate::diagnostics::{CheckDiagnostics, DetailedReport};
use crate::error::QualityError;
use crate::heatmap::{blur_heatmap, blur_mask, glare_map};
use crate::image::{RgbBufferU8, RgbImageU8};
use crate::metrics::{
    analyze_blur, banding, color_dominance, contrast_metric, exposure_metric, glare,
    intensity_from_rgb, luminance_stats, motion_blur, noise, variance_proxy_score,
};
use crate::regions::find_regions;
use crate::resample::{
    downsample_rgb, rescale_region, scaled_dimensions, upsample_gray, ScaleToFull,
};
use crate::types::QualityReport;
use log::debug;
use std::time::Instant;

/// Smallest width/height the 3×3 neighbourhood kernels can evaluate.
const MIN_KERNEL_DIM: usize = 3;

/// Stateless checker bundling the settings with the pipeline entry points.
///
/// Every invocation allocates its buffers fresh; a single instance can be
/// shared across threads.
pub struct DocumentChecker {
    settings: QualitySettings,
}

impl DocumentChecker {
    /// Create a checker with the supplied settings.
    pub fn new(settings: QualitySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &QualitySettings {
        &self.settings
    }

    /// Run all checks, returning the compact report.
    pub fn check(&self, image: RgbImageU8<'_>) -> Result<QualityReport, QualityError> {
        self.check_with_diagnostics(image).map(|d| d.report)
    }

    /// Run all checks and return the report plus stage diagnostics.
    pub fn check_with_diagnostics(
        &self,
        image: RgbImageU8<'_>,
    ) -> Result<DetailedReport, QualityError> {
        validate(&image)?;

        let s = &self.settings;
        let (full_w, full_h) = (image.w, image.h);
        let scale = s.clamped_scale();
        let total_start = Instant::now();

        let down_start = Instant::now();
        let downsampled: Option<RgbBufferU8> = if scale < 1.0 {
            let (nw, nh) = scaled_dimensions(full_w, full_h, scale);
            (nw < full_w || nh < full_h).then(|| downsample_rgb(&image, nw, nh))
        } else {
            None
        };
        let downsample_ms = down_start.elapsed().as_secs_f64() * 1000.0;

        let analysis = match &downsampled {
            Some(buf) => buf.as_view(),
            None => image.clone(),
        };
        let (aw, ah) = (analysis.w, analysis.h);
        debug!(
            "DocumentChecker::check start input={}x{} analysis={}x{} scale={:.2}",
            full_w, full_h, aw, ah, scale
        );

        let intensity_start = Instant::now();
        let intensity = intensity_from_rgb(&analysis);
        let intensity_ms = intensity_start.elapsed().as_secs_f64() * 1000.0;

        // Scalar kernels: mutually independent, all computed at the analysis
        // resolution. The Laplacian plane inside `blur` is the single source
        // for the score, the heatmap and the region mask.
        let metrics_start = Instant::now();
        let blur = analyze_blur(&intensity, s.blur_threshold);
        let motion = motion_blur(&intensity, s.motion_blur_threshold);
        let glare_metric = glare(&intensity, s.bright_threshold, s.area_threshold);
        let stats = luminance_stats(&analysis);
        let exposure = exposure_metric(&stats, s.exposure_min, s.exposure_max);
        let contrast = contrast_metric(&stats, s.contrast_min);
        let dominance = color_dominance(&stats, s.dominance_threshold);
        let noise_metric = noise(&intensity, s.noise_threshold);
        let banding_metric = banding(&intensity, s.banding_threshold);
        let brisque_score = variance_proxy_score(&intensity);
        let brisque_valid = brisque_score <= s.brisque_max;
        let metrics_ms = metrics_start.elapsed().as_secs_f64() * 1000.0;

        let is_valid_document = brisque_valid
            && !blur.is_blurry
            && !motion.has_motion_blur
            && !glare_metric.has_glare
            && exposure.is_well_exposed
            && !contrast.has_low_contrast
            && !dominance.has_color_dominance
            && !noise_metric.has_noise
            && !banding_metric.has_banding;

        let mut heatmap_ms = 0.0;
        let mut region_ms = 0.0;
        let mut blur_heatmap_out = None;
        let mut glare_heatmap_out = None;
        let mut blur_regions_out = None;
        let mut glare_regions_out = None;

        if s.generate_heatmaps {
            let heatmap_start = Instant::now();
            let blur_magnitude = blur_heatmap(&blur.laplacian);
            let blurry_mask = blur_mask(&blur.laplacian, s.blur_threshold);
            let glare_buffer = glare_map(&intensity, s.bright_threshold);
            heatmap_ms = heatmap_start.elapsed().as_secs_f64() * 1000.0;

            let region_start = Instant::now();
            let blur_regions = find_regions(&blurry_mask);
            let glare_regions = find_regions(&glare_buffer);

            if aw != full_w || ah != full_h {
                let lift = ScaleToFull::from_dimensions(aw, ah, full_w, full_h);
                blur_regions_out = Some(
                    blur_regions
                        .iter()
                        .map(|r| rescale_region(r, &lift, full_w, full_h))
                        .collect(),
                );
                glare_regions_out = Some(
                    glare_regions
                        .iter()
                        .map(|r| rescale_region(r, &lift, full_w, full_h))
                        .collect(),
                );
                blur_heatmap_out = Some(upsample_gray(&blur_magnitude, full_w, full_h));
                glare_heatmap_out = Some(upsample_gray(&glare_buffer, full_w, full_h));
            } else {
                blur_regions_out = Some(blur_regions);
                glare_regions_out = Some(glare_regions);
                blur_heatmap_out = Some(blur_magnitude);
                glare_heatmap_out = Some(glare_buffer);
            }
            region_ms = region_start.elapsed().as_secs_f64() * 1000.0;
        }

        let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "DocumentChecker::check done valid={} total_ms={:.3}",
            is_valid_document, total_latency_ms
        );

        let report = QualityReport {
            brisque_score,
            brisque_valid,
            blur_score: blur.score,
            is_blurry: blur.is_blurry,
            motion_blur_score: motion.ratio,
            has_motion_blur: motion.has_motion_blur,
            glare_area: glare_metric.area,
            has_glare: glare_metric.has_glare,
            exposure: exposure.exposure,
            is_well_exposed: exposure.is_well_exposed,
            contrast: contrast.contrast,
            has_low_contrast: contrast.has_low_contrast,
            color_dominance: dominance.ratio,
            has_color_dominance: dominance.has_color_dominance,
            noise: noise_metric.score,
            has_noise: noise_metric.has_noise,
            banding_score: banding_metric.score,
            has_banding: banding_metric.has_banding,
            is_valid_document,
            blur_heatmap: blur_heatmap_out,
            glare_heatmap: glare_heatmap_out,
            blur_regions: blur_regions_out,
            glare_regions: glare_regions_out,
        };

        let diagnostics = CheckDiagnostics {
            input_width: full_w,
            input_height: full_h,
            analysis_width: aw,
            analysis_height: ah,
            processing_scale: scale,
            downsample_ms,
            intensity_ms,
            metrics_ms,
            heatmap_ms,
            region_ms,
            total_latency_ms,
        };

        Ok(DetailedReport {
            report,
            diagnostics,
        })
    }
}

fn validate(image: &RgbImageU8<'_>) -> Result<(), QualityError> {
    if image.w == 0 || image.h == 0 || image.data.is_empty() || image.stride < 3 * image.w {
        return Err(QualityError::InvalidInput {
            width: image.w,
            height: image.h,
        });
    }
    let required = image.required_len();
    if image.data.len() < required {
        return Err(QualityError::BufferTooSmall {
            required,
            actual: image.data.len(),
        });
    }
    if image.w < MIN_KERNEL_DIM || image.h < MIN_KERNEL_DIM {
        return Err(QualityError::DegenerateImage {
            width: image.w,
            height: image.h,
            minimum: MIN_KERNEL_DIM,
        });
    }
    Ok(())
}
