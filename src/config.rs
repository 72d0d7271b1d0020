//! Run configuration for the CLI driver.
//!
//! The original tool hard-coded its input path and output folder; here they
//! are an explicit structure read from a JSON file and handed to the
//! pipeline entry point.

use crate::error::PipelineError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    /// Source image to equalize.
    pub input: PathBuf,
    /// Directory receiving the equalized image, the six histogram charts
    /// and the optional report. Created if absent.
    #[serde(rename = "outputDir")]
    pub output_dir: PathBuf,
    /// File name of the equalized image inside `output_dir`; the extension
    /// selects the container format.
    #[serde(rename = "imageName", default = "default_image_name")]
    pub image_name: String,
    /// Optional path for the JSON run report (histograms, remap tables,
    /// timings).
    #[serde(rename = "reportJson", default)]
    pub report_json: Option<PathBuf>,
}

fn default_image_name() -> String {
    "equalized_color_image.jpg".to_string()
}

pub fn load_config(path: &Path) -> Result<RunConfig, PipelineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
