use doc_quality::image::RgbImageU8;
use doc_quality::{DocumentChecker, QualitySettings};

fn main() {
    // Demo stub: creates a flat mid-gray buffer and runs every check
    let w = 640usize;
    let h = 480usize;
    let stride = w * 3; // tightly packed
    let pixels = vec![128u8; stride * h];
    let image = RgbImageU8 {
        w,
        h,
        stride,
        data: &pixels,
    };

    let checker = DocumentChecker::new(QualitySettings::default());
    match checker.check_with_diagnostics(image) {
        Ok(detailed) => println!(
            "valid={} blur={:.2} latency_ms={:.3}",
            detailed.report.is_valid_document,
            detailed.report.blur_score,
            detailed.diagnostics.total_latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
