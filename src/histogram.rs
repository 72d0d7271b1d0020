//! 256-bin intensity histogram of an 8-bit channel.

use crate::types::PixelBuffer;
use serde::ser::{Serialize, SerializeSeq, Serializer};

pub const NUM_BINS: usize = 256;

/// Frequency count of each possible intensity value in a channel.
///
/// Counts sum to the pixel count of the source buffer; an empty buffer
/// yields an all-zero histogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; NUM_BINS],
}

impl Histogram {
    /// Count every pixel of `buffer` into its intensity bin.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let mut bins = [0u64; NUM_BINS];
        for value in buffer.pixels() {
            bins[value as usize] += 1;
        }
        Self { bins }
    }

    /// Build a histogram directly from bin counts.
    pub fn from_bins(bins: [u64; NUM_BINS]) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[u64; NUM_BINS] {
        &self.bins
    }

    /// Count for a single intensity level.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.bins[value as usize]
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Largest bin count; zero for an empty histogram.
    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Number of intensity levels with at least one pixel.
    pub fn occupied_bins(&self) -> usize {
        self.bins.iter().filter(|&&c| c > 0).count()
    }
}

// Serialized as a plain 256-element sequence; serde's derive does not
// cover arrays of this length.
impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(NUM_BINS))?;
        for count in &self.bins {
            seq.serialize_element(count)?;
        }
        seq.end()
    }
}
