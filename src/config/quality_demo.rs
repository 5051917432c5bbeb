use crate::checker::QualitySettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Detailed JSON report destination; stdout when omitted.
    pub json_out: Option<PathBuf>,
    /// Directory for heatmap PNGs when `generate_heatmaps` is enabled.
    pub heatmap_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct QualityDemoConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub settings: QualitySettings,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<QualityDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: QualityDemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
