//! Histogram equalization via a cumulative-distribution remap table.
//!
//! Design
//! - `cdf[i]` is the running sum of histogram counts up to and including
//!   intensity `i`; `cdf_min` is the cumulative count at the lowest
//!   populated intensity (the first nonzero cdf entry).
//! - `table[i] = round((cdf[i] - cdf_min) / (N - cdf_min) * 255)`, clamped
//!   to `[0, 255]`. Rounding is half-away-from-zero (`f64::round`), which
//!   on these non-negative operands equals round-half-up. The rule is part
//!   of the contract; edge bins shift by one under any other policy.
//! - Degenerate inputs are not errors: an empty histogram (`N == 0`) and a
//!   flat channel (`N == cdf_min`, a single populated intensity) both map
//!   through the identity table, so equalizing them is a no-op.
//!
//! Notes
//! - The table derives from a non-decreasing cdf, so it is itself
//!   monotonically non-decreasing.
//! - A histogram already spread uniformly over all 256 levels produces the
//!   identity table, so re-equalizing a maximally spread channel changes
//!   nothing.

use crate::histogram::{Histogram, NUM_BINS};
use crate::types::PixelBuffer;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Lookup table translating each input intensity to an output intensity.
///
/// Always monotonically non-decreasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemapTable {
    entries: [u8; NUM_BINS],
}

impl RemapTable {
    /// The table mapping every intensity to itself.
    pub fn identity() -> Self {
        let mut entries = [0u8; NUM_BINS];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { entries }
    }

    /// Derive the equalization table from a channel histogram.
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let cdf = cumulative(histogram);
        let total = cdf[NUM_BINS - 1];
        let cdf_min = match cdf.iter().copied().find(|&c| c > 0) {
            Some(c) => c,
            None => return Self::identity(),
        };
        if total == cdf_min {
            // Single populated intensity: nothing to spread.
            return Self::identity();
        }

        let scale = 255.0 / (total - cdf_min) as f64;
        let mut entries = [0u8; NUM_BINS];
        for (i, entry) in entries.iter_mut().enumerate() {
            let shifted = cdf[i] as f64 - cdf_min as f64;
            *entry = (shifted * scale).round().clamp(0.0, 255.0) as u8;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[u8; NUM_BINS] {
        &self.entries
    }

    /// Output intensity for a given input intensity.
    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.entries[value as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, &v)| v as usize == i)
    }

    /// Remap every pixel of `buffer` through the table into a new buffer.
    pub fn apply(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let data = buffer.pixels().map(|v| self.map(v)).collect();
        PixelBuffer::new(buffer.width(), buffer.height(), data)
            .expect("remapping preserves buffer dimensions")
    }
}

/// Running sum of histogram counts up to and including each intensity.
fn cumulative(histogram: &Histogram) -> [u64; NUM_BINS] {
    let mut cdf = [0u64; NUM_BINS];
    let mut running = 0u64;
    for (i, &count) in histogram.bins().iter().enumerate() {
        running += count;
        cdf[i] = running;
    }
    cdf
}

/// Equalize a channel in one shot: compute its histogram, derive the remap
/// table and apply it. Returns the equalized buffer together with the table
/// for inspection and reporting.
pub fn equalize(buffer: &PixelBuffer) -> (PixelBuffer, RemapTable) {
    let histogram = Histogram::from_buffer(buffer);
    let table = RemapTable::from_histogram(&histogram);
    (table.apply(buffer), table)
}

impl Serialize for RemapTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(NUM_BINS))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}
