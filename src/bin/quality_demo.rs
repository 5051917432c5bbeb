use doc_quality::config::quality_demo::{self, QualityDemoConfig};
use doc_quality::diagnostics::DetailedReport;
use doc_quality::image::io::{load_rgb_image, save_gray_u8, write_json_file};
use doc_quality::DocumentChecker;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: quality_demo <config.json>".to_string())?;
    let config = quality_demo::load_config(Path::new(&config_path))?;

    let pixels = load_rgb_image(&config.input_path)?;
    let checker = DocumentChecker::new(config.settings.clone());
    let detailed = checker
        .check_with_diagnostics(pixels.as_view())
        .map_err(|e| format!("Quality check failed: {e}"))?;

    print_text_summary(&detailed);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &detailed)?;
        println!("\nJSON report written to {}", path.display());
    }

    save_heatmaps(&config, &detailed)?;
    Ok(())
}

fn print_text_summary(detailed: &DetailedReport) {
    let r = &detailed.report;
    println!("Quality summary");
    println!("  valid: {}", r.is_valid_document);
    println!("  brisque: {:.2} (ok: {})", r.brisque_score, r.brisque_valid);
    println!("  blur: {:.2} (blurry: {})", r.blur_score, r.is_blurry);
    println!(
        "  motion: {:.2} (flagged: {})",
        r.motion_blur_score, r.has_motion_blur
    );
    println!("  glare area: {} (flagged: {})", r.glare_area, r.has_glare);
    println!(
        "  exposure: {:.2} (well exposed: {})",
        r.exposure, r.is_well_exposed
    );
    println!(
        "  contrast: {:.2} (low: {})",
        r.contrast, r.has_low_contrast
    );
    println!(
        "  dominance: {:.2} (flagged: {})",
        r.color_dominance, r.has_color_dominance
    );
    println!("  noise: {:.2} (flagged: {})", r.noise, r.has_noise);
    println!(
        "  banding: {:.3} (flagged: {})",
        r.banding_score, r.has_banding
    );
    println!(
        "  latency_ms: {:.3}",
        detailed.diagnostics.total_latency_ms
    );
}

fn save_heatmaps(config: &QualityDemoConfig, detailed: &DetailedReport) -> Result<(), String> {
    let dir = match &config.output.heatmap_dir {
        Some(dir) => dir,
        None => return Ok(()),
    };
    let r = &detailed.report;

    if let Some(map) = &r.blur_heatmap {
        save_gray_u8(map, &dir.join("blur_heatmap.png"))?;
    }
    if let Some(map) = &r.glare_heatmap {
        save_gray_u8(map, &dir.join("glare_heatmap.png"))?;
    }
    if r.blur_heatmap.is_some() || r.glare_heatmap.is_some() {
        println!("Heatmaps written to {}", dir.display());
        if let Some(regions) = &r.blur_regions {
            println!("  blur regions: {}", regions.len());
        }
        if let Some(regions) = &r.glare_regions {
            println!("  glare regions: {}", regions.len());
        }
    }
    Ok(())
}
