//! Serializable per-run diagnostics emitted by the pipeline.

use crate::equalize::RemapTable;
use crate::histogram::Histogram;
use crate::types::{ChannelLabel, ColorImage};
use serde::Serialize;

/// Record of one channel's trip through the equalizer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTrace {
    pub label: ChannelLabel,
    /// Intensity distribution before equalization.
    pub pre: Histogram,
    /// Intensity distribution after equalization.
    pub post: Histogram,
    /// The remap table that was applied.
    pub table: RemapTable,
    pub elapsed_ms: f64,
}

/// Full pipeline output: the equalized image plus per-channel traces.
///
/// Serializing the report yields only the traces and timings; the image
/// itself is persisted separately through the codec.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualizeReport {
    #[serde(skip)]
    pub image: ColorImage,
    pub width: usize,
    pub height: usize,
    pub channels: [ChannelTrace; 3],
    pub total_latency_ms: f64,
}
