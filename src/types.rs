use crate::image::GrayImageU8;
use crate::regions::Region;
use serde::Serialize;

/// Aggregated outcome of the nine quality checks.
///
/// One numeric score and one boolean flag per check, plus the overall
/// verdict. The heatmap and region fields are populated only when
/// `QualitySettings::generate_heatmaps` is set; region boxes always refer to
/// the original (pre-downsample) resolution.
#[derive(Clone, Debug, Default, Serialize)]
pub struct QualityReport {
    /// Global-variance proxy score (not a trained BRISQUE).
    pub brisque_score: f64,
    pub brisque_valid: bool,
    /// Mean squared Laplacian over interior pixels.
    pub blur_score: f64,
    pub is_blurry: bool,
    /// Ratio of the dominant to the weaker directional gradient sum.
    pub motion_blur_score: f64,
    pub has_motion_blur: bool,
    /// Count of pixels at or above the brightness threshold.
    pub glare_area: usize,
    pub has_glare: bool,
    /// Mean luminance (Rec.601 weights).
    pub exposure: f64,
    pub is_well_exposed: bool,
    /// Standard deviation of luminance.
    pub contrast: f64,
    pub has_low_contrast: bool,
    /// Dominant channel mean over the average channel mean.
    pub color_dominance: f64,
    pub has_color_dominance: bool,
    /// Mean squared deviation from the 8-neighbour mean.
    pub noise: f64,
    pub has_noise: bool,
    /// Share of pixel variance explained by row or column structure.
    pub banding_score: f64,
    pub has_banding: bool,
    /// Conjunction of all per-check pass conditions.
    pub is_valid_document: bool,

    /// |Laplacian| magnitude map, original resolution.
    #[serde(skip)]
    pub blur_heatmap: Option<GrayImageU8>,
    /// Binary brightness map, original resolution.
    #[serde(skip)]
    pub glare_heatmap: Option<GrayImageU8>,
    /// Bounding boxes of low-edge-energy (blurry) components.
    pub blur_regions: Option<Vec<Region>>,
    /// Bounding boxes of bright components.
    pub glare_regions: Option<Vec<Region>>,
}
