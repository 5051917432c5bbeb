mod common;

use common::synthetic_image::{fill_rect, solid_rgb};
use doc_quality::image::RgbImageU8;
use doc_quality::{DocumentChecker, QualitySettings, Region};

fn view(buf: &[u8], w: usize, h: usize) -> RgbImageU8<'_> {
    RgbImageU8 {
        w,
        h,
        stride: 3 * w,
        data: buf,
    }
}

fn intersection_over_union(a: &Region, b: &Region) -> f64 {
    let ix = a.right.min(b.right).saturating_sub(a.left.max(b.left));
    let iy = a.bottom.min(b.bottom).saturating_sub(a.top.max(b.top));
    let inter = (ix * iy) as f64;
    let union = (a.area() + b.area()) as f64 - inter;
    inter / union
}

fn settings_with_scale(scale: f64) -> QualitySettings {
    QualitySettings {
        generate_heatmaps: true,
        processing_scale: scale,
        ..Default::default()
    }
}

#[test]
fn heatmaps_present_and_sized_like_the_input() {
    let (w, h) = (120usize, 90usize);
    let mut buf = solid_rgb(w, h, [0, 0, 0]);
    fill_rect(&mut buf, w, (20, 20), (60, 50), [255, 255, 255]);

    let checker = DocumentChecker::new(settings_with_scale(1.0));
    let report = checker.check(view(&buf, w, h)).expect("valid input");

    let blur_map = report.blur_heatmap.expect("blur heatmap requested");
    let glare_map = report.glare_heatmap.expect("glare heatmap requested");
    assert_eq!((blur_map.w, blur_map.h), (w, h));
    assert_eq!((glare_map.w, glare_map.h), (w, h));
    // The glare map is the binary brightness mask itself.
    assert_eq!(glare_map.get(30, 30), 255);
    assert_eq!(glare_map.get(70, 70), 0);
    assert!(report.blur_regions.is_some());
    assert!(report.glare_regions.is_some());
}

#[test]
fn full_resolution_glare_region_is_exact() {
    let (w, h) = (200usize, 200usize);
    let mut buf = solid_rgb(w, h, [0, 0, 0]);
    fill_rect(&mut buf, w, (40, 40), (140, 140), [255, 255, 255]);

    let checker = DocumentChecker::new(settings_with_scale(1.0));
    let report = checker.check(view(&buf, w, h)).expect("valid input");

    let regions = report.glare_regions.expect("glare regions requested");
    assert_eq!(regions.len(), 1);
    assert_eq!(
        regions[0],
        Region {
            left: 40,
            top: 40,
            right: 140,
            bottom: 140
        }
    );
}

/// Boxes from half-resolution analysis, lifted back to full resolution, must
/// agree with the full-resolution boxes to better than 50% IoU.
#[test]
fn downsampled_glare_region_overlaps_full_resolution_result() {
    let (w, h) = (200usize, 200usize);
    let mut buf = solid_rgb(w, h, [0, 0, 0]);
    fill_rect(&mut buf, w, (40, 40), (140, 140), [255, 255, 255]);

    let full = DocumentChecker::new(settings_with_scale(1.0))
        .check(view(&buf, w, h))
        .expect("valid input");
    let halved = DocumentChecker::new(settings_with_scale(0.5))
        .check(view(&buf, w, h))
        .expect("valid input");

    let full_regions = full.glare_regions.expect("full-res regions");
    let halved_regions = halved.glare_regions.expect("half-res regions");
    assert_eq!(full_regions.len(), 1);
    assert_eq!(halved_regions.len(), 1);

    let iou = intersection_over_union(&full_regions[0], &halved_regions[0]);
    assert!(iou > 0.5, "IoU too low: {iou:.3}");

    // Lifted boxes stay inside the original image bounds.
    let lifted = &halved_regions[0];
    assert!(lifted.right <= w && lifted.bottom <= h);
    assert!(lifted.right > lifted.left && lifted.bottom > lifted.top);
}

#[test]
fn downsampled_heatmaps_are_upsampled_to_original_size() {
    let (w, h) = (160usize, 120usize);
    let mut buf = solid_rgb(w, h, [30, 30, 30]);
    fill_rect(&mut buf, w, (50, 30), (110, 90), [255, 255, 255]);

    let checker = DocumentChecker::new(settings_with_scale(0.5));
    let detailed = checker
        .check_with_diagnostics(view(&buf, w, h))
        .expect("valid input");

    assert_eq!(detailed.diagnostics.analysis_width, 80);
    assert_eq!(detailed.diagnostics.analysis_height, 60);

    let blur_map = detailed.report.blur_heatmap.expect("blur heatmap");
    let glare_map = detailed.report.glare_heatmap.expect("glare heatmap");
    assert_eq!((blur_map.w, blur_map.h), (w, h));
    assert_eq!((glare_map.w, glare_map.h), (w, h));
    // Deep inside the bright rectangle the upsampled glare map stays set.
    assert_eq!(glare_map.get(80, 60), 255);
    assert_eq!(glare_map.get(10, 10), 0);
}

/// Scalar metrics are reported at the analysis resolution; the glare count
/// shrinks roughly with the square of the scale.
#[test]
fn glare_area_is_reported_at_the_reduced_resolution() {
    let (w, h) = (200usize, 200usize);
    let mut buf = solid_rgb(w, h, [0, 0, 0]);
    fill_rect(&mut buf, w, (40, 40), (140, 140), [255, 255, 255]);

    let full = DocumentChecker::new(settings_with_scale(1.0))
        .check(view(&buf, w, h))
        .expect("valid input");
    let halved = DocumentChecker::new(settings_with_scale(0.5))
        .check(view(&buf, w, h))
        .expect("valid input");

    assert_eq!(full.glare_area, 10_000);
    let expected = 2_500f64;
    let deviation = (halved.glare_area as f64 - expected).abs() / expected;
    assert!(
        deviation < 0.25,
        "half-res glare area {} too far from {expected}",
        halved.glare_area
    );
}
