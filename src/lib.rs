#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod channels;
pub mod diagnostics;
pub mod equalize;
pub mod error;
pub mod histogram;
pub mod pipeline;
pub mod types;

// Collaborator-facing modules: codec, charting, configuration.
pub mod config;
pub mod io;
pub mod plot;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the per-channel pipeline and its report.
pub use crate::diagnostics::{ChannelTrace, EqualizeReport};
pub use crate::pipeline::process;

// Stage-level pieces, useful on their own.
pub use crate::equalize::{equalize, RemapTable};
pub use crate::histogram::Histogram;

pub use crate::error::{PipelineError, ShapeError};
pub use crate::types::{ChannelLabel, ColorImage, PixelBuffer};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use channel_equalizer::prelude::*;
///
/// # fn main() {
/// let channel = PixelBuffer::filled(64, 48, 42);
/// let image = ColorImage::new(channel.clone(), channel.clone(), channel).unwrap();
/// let report = process(image).unwrap();
/// println!("done in {:.3} ms", report.total_latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::pipeline::process;
    pub use crate::types::{ChannelLabel, ColorImage, PixelBuffer};
    pub use crate::{EqualizeReport, Histogram, RemapTable};
}
