use crate::types::QualityReport;
use serde::Serialize;

/// Stage timings and geometry captured during a single check.
#[derive(Clone, Debug, Serialize)]
pub struct CheckDiagnostics {
    pub input_width: usize,
    pub input_height: usize,
    /// Resolution the kernels actually ran at.
    pub analysis_width: usize,
    pub analysis_height: usize,
    /// Scale factor after clamping to [0.1, 1.0].
    pub processing_scale: f64,
    pub downsample_ms: f64,
    pub intensity_ms: f64,
    pub metrics_ms: f64,
    pub heatmap_ms: f64,
    pub region_ms: f64,
    pub total_latency_ms: f64,
}

/// Report plus per-stage diagnostics, as written by the demo tools.
#[derive(Clone, Debug, Serialize)]
pub struct DetailedReport {
    pub report: QualityReport,
    pub diagnostics: CheckDiagnostics,
}
