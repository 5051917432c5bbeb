//! Document quality checker: settings and pipeline.
//!
//! Overview
//! - Validates the input buffer (empty, undersized or sub-3×3 images are
//!   rejected up front with a structured error).
//! - Optionally downsamples the source before analysis when
//!   `processing_scale < 1.0`; scalar metrics are then reported at the
//!   reduced resolution while heatmaps and region boxes are lifted back to
//!   the original one.
//! - Extracts the shared intensity plane, runs the nine scalar kernels, and
//!   ANDs their pass conditions into `is_valid_document`.
//! - When `generate_heatmaps` is set, additionally renders the blur
//!   magnitude heatmap, the blurry-region mask and the glare map, and
//!   extracts connected-component bounding boxes from the masks.
//!
//! Modules
//! - [`settings`] — threshold configuration with documented defaults.
//! - `pipeline` — the [`DocumentChecker`] implementation.

pub mod settings;
mod pipeline;

pub use pipeline::DocumentChecker;
pub use settings::QualitySettings;
