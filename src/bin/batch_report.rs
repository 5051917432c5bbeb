use doc_quality::config::batch;
use doc_quality::image::io::{load_rgb_image, write_json_file};
use doc_quality::{DocumentChecker, QualityReport};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::Write;
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
        .ok_or_else(|| "Usage: batch_report <config.json>".to_string())?;
    let config = batch::load_config(Path::new(&config_path))?;

    let listing = fs::read_to_string(&config.sample_list)
        .map_err(|e| format!("Failed to read {}: {e}", config.sample_list.display()))?;
    let paths: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    fs::create_dir_all(&config.out_dir)
        .map_err(|e| format!("Failed to create {}: {e}", config.out_dir.display()))?;
    let csv_path = config.out_dir.join("metrics_per_image.csv");
    let mut csv = fs::File::create(&csv_path)
        .map_err(|e| format!("Failed to create {}: {e}", csv_path.display()))?;
    writeln!(
        csv,
        "path,BlurScore,IsBlurry,MotionBlurScore,GlareArea,HasGlare,Exposure,IsWellExposed,\
         Contrast,HasLowContrast,Noise,HasNoise,ColorDominance,HasColorDominance,BandingScore,\
         HasBanding,BrisqueScore,IsValidDocument,ElapsedMs"
    )
    .map_err(|e| format!("Failed to write CSV: {e}"))?;

    let checker = DocumentChecker::new(config.settings.clone());
    let mut summary = SummaryAccum::default();

    for path in &paths {
        match process_one(&checker, path) {
            Ok((report, elapsed_ms)) => {
                write_csv_row(&mut csv, path, &report, elapsed_ms)?;
                summary.add(&report, elapsed_ms);
            }
            Err(err) => eprintln!("Skipping {path}: {err}"),
        }
    }

    let summary_path = config.out_dir.join("summary.json");
    write_json_file(&summary_path, &summary.finish())?;
    println!(
        "Processed {} of {} images; reports in {}",
        summary.images,
        paths.len(),
        config.out_dir.display()
    );
    Ok(())
}

fn process_one(checker: &DocumentChecker, path: &str) -> Result<(QualityReport, f64), String> {
    let pixels = load_rgb_image(Path::new(path))?;
    let detailed = checker
        .check_with_diagnostics(pixels.as_view())
        .map_err(|e| format!("Quality check failed: {e}"))?;
    let elapsed = detailed.diagnostics.total_latency_ms;
    Ok((detailed.report, elapsed))
}

fn write_csv_row(
    csv: &mut fs::File,
    path: &str,
    r: &QualityReport,
    elapsed_ms: f64,
) -> Result<(), String> {
    writeln!(
        csv,
        "{path},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        r.blur_score,
        r.is_blurry,
        r.motion_blur_score,
        r.glare_area,
        r.has_glare,
        r.exposure,
        r.is_well_exposed,
        r.contrast,
        r.has_low_contrast,
        r.noise,
        r.has_noise,
        r.color_dominance,
        r.has_color_dominance,
        r.banding_score,
        r.has_banding,
        r.brisque_score,
        r.is_valid_document,
        elapsed_ms
    )
    .map_err(|e| format!("Failed to write CSV: {e}"))
}

#[derive(Default)]
struct SummaryAccum {
    images: usize,
    valid: usize,
    blur: f64,
    exposure: f64,
    contrast: f64,
    noise: f64,
    banding: f64,
    brisque: f64,
    elapsed_ms: f64,
}

impl SummaryAccum {
    fn add(&mut self, r: &QualityReport, elapsed_ms: f64) {
        self.images += 1;
        self.valid += r.is_valid_document as usize;
        self.blur += r.blur_score;
        self.exposure += r.exposure;
        self.contrast += r.contrast;
        self.noise += r.noise;
        self.banding += r.banding_score;
        self.brisque += r.brisque_score;
        self.elapsed_ms += elapsed_ms;
    }

    fn finish(&self) -> BatchSummary {
        let n = self.images.max(1) as f64;
        BatchSummary {
            images: self.images,
            valid: self.valid,
            mean_blur_score: self.blur / n,
            mean_exposure: self.exposure / n,
            mean_contrast: self.contrast / n,
            mean_noise: self.noise / n,
            mean_banding_score: self.banding / n,
            mean_brisque_score: self.brisque / n,
            mean_elapsed_ms: self.elapsed_ms / n,
        }
    }
}

#[derive(Serialize)]
struct BatchSummary {
    images: usize,
    valid: usize,
    mean_blur_score: f64,
    mean_exposure: f64,
    mean_contrast: f64,
    mean_noise: f64,
    mean_banding_score: f64,
    mean_brisque_score: f64,
    mean_elapsed_ms: f64,
}
