#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod checker;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod regions;
pub mod types;

// Lower-level building blocks — public for tools and advanced users.
pub mod config;
pub mod heatmap;
pub mod metrics;
pub mod resample;

// --- High-level re-exports -------------------------------------------------

// Main entry points: checker + results.
pub use crate::checker::{DocumentChecker, QualitySettings};
pub use crate::error::QualityError;
pub use crate::types::QualityReport;

// Detailed diagnostics returned alongside the report.
pub use crate::diagnostics::{CheckDiagnostics, DetailedReport};

// Region boxes referenced by the report.
pub use crate::regions::{find_regions, Region};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use doc_quality::prelude::*;
///
/// # fn main() {
/// let (w, h) = (320usize, 240usize);
/// let pixels = vec![128u8; w * h * 3];
/// let image = RgbImageU8 { w, h, stride: w * 3, data: &pixels };
///
/// let checker = DocumentChecker::new(QualitySettings::default());
/// let report = checker.check(image).expect("well-formed input");
/// println!("valid={} blur={:.1}", report.is_valid_document, report.blur_score);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbImageU8;
    pub use crate::{DocumentChecker, QualityReport, QualitySettings, Region};
}
