//! Error types for the core transforms and the surrounding I/O glue.

use std::path::PathBuf;
use thiserror::Error;

/// Dimension violations raised while assembling or splitting images.
///
/// These are fatal for the image being processed and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("image has zero width or height ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
    #[error(
        "channel dimensions differ: expected {}x{}, found {}x{}",
        expected.0, expected.1, found.0, found.1
    )]
    ChannelMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("buffer length {found} does not match expected {expected} pixels")]
    BufferLength { expected: usize, found: usize },
}

/// Errors surfaced by the CLI driver and the I/O collaborators.
///
/// Degenerate histograms (a flat or empty channel) are not represented
/// here: the equalizer falls back to the identity remap table instead of
/// failing.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input image not found at {}", path.display())]
    InputMissing { path: PathBuf },
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("{0}")]
    Usage(String),
}
