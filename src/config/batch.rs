use crate::checker::QualitySettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Deserialize)]
pub struct BatchReportConfig {
    /// Text file listing one image path per line.
    pub sample_list: PathBuf,
    /// Directory receiving `metrics_per_image.csv` and `summary.json`.
    pub out_dir: PathBuf,
    #[serde(default)]
    pub settings: QualitySettings,
}

pub fn load_config(path: &Path) -> Result<BatchReportConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: BatchReportConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
