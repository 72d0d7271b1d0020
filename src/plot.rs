//! Histogram bar charts rendered to PNG via plotters.
//!
//! Charts are drawn with raw primitives on a bitmap backend (no font
//! rasterization): white background, light horizontal gridlines, an axis
//! frame, and one bar per intensity bin in the channel color. The artifact
//! name is derived deterministically from the channel label and the
//! before/after tag.

use crate::error::PipelineError;
use crate::histogram::{Histogram, NUM_BINS};
use crate::io::ensure_parent_dir;
use crate::types::ChannelLabel;
use plotters::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 480;
const MARGIN_LEFT: i32 = 40;
const MARGIN_RIGHT: i32 = 20;
const MARGIN_TOP: i32 = 20;
const MARGIN_BOTTOM: i32 = 40;

/// Whether a chart shows the distribution before or after equalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramTag {
    Original,
    Equalized,
}

impl HistogramTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistogramTag::Original => "original",
            HistogramTag::Equalized => "equalized",
        }
    }
}

impl fmt::Display for HistogramTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic artifact name: `histogram_{label}_{tag}.png`.
pub fn chart_file_name(label: ChannelLabel, tag: HistogramTag) -> String {
    format!("histogram_{label}_{tag}.png")
}

fn bar_color(label: ChannelLabel) -> RGBColor {
    match label {
        ChannelLabel::Red => RED,
        ChannelLabel::Green => GREEN,
        ChannelLabel::Blue => BLUE,
    }
}

/// Render `histogram` as a bar chart under `dir`, returning the written path.
pub fn save_histogram_chart(
    histogram: &Histogram,
    label: ChannelLabel,
    tag: HistogramTag,
    dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let path = dir.join(chart_file_name(label, tag));
    ensure_parent_dir(&path)?;

    let root = BitMapBackend::new(&path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PipelineError::Chart(e.to_string()))?;

    let left = MARGIN_LEFT;
    let right = CHART_WIDTH as i32 - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = CHART_HEIGHT as i32 - MARGIN_BOTTOM;
    let plot_width = (right - left) as i64;
    let plot_height = (bottom - top) as i64;

    // Horizontal quarter gridlines behind the bars.
    let grid_color = RGBColor(210, 210, 210);
    for q in 1..=4 {
        let y = bottom - (plot_height * q / 4) as i32;
        root.draw(&PathElement::new([(left, y), (right, y)], grid_color))
            .map_err(|e| PipelineError::Chart(e.to_string()))?;
    }

    let max_count = histogram.max_count();
    if max_count > 0 {
        let color = bar_color(label).filled();
        for (i, &count) in histogram.bins().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let x0 = left + (plot_width * i as i64 / NUM_BINS as i64) as i32;
            let x1 = left + (plot_width * (i as i64 + 1) / NUM_BINS as i64) as i32;
            let bar = (plot_height * count as i64 / max_count as i64).max(1) as i32;
            root.draw(&Rectangle::new(
                [(x0, bottom - bar), (x1.max(x0 + 1), bottom)],
                color,
            ))
            .map_err(|e| PipelineError::Chart(e.to_string()))?;
        }
    }

    // Axis frame on top of the bars.
    let axis_color = RGBColor(60, 60, 60);
    root.draw(&PathElement::new(
        [(left, top), (left, bottom), (right, bottom)],
        axis_color,
    ))
    .map_err(|e| PipelineError::Chart(e.to_string()))?;

    root.present()
        .map_err(|e| PipelineError::Chart(e.to_string()))?;
    drop(root);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_deterministic() {
        assert_eq!(
            chart_file_name(ChannelLabel::Red, HistogramTag::Original),
            "histogram_red_original.png"
        );
        assert_eq!(
            chart_file_name(ChannelLabel::Blue, HistogramTag::Equalized),
            "histogram_blue_equalized.png"
        );
    }
}
