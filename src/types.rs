//! Value types shared across the pipeline stages.

use crate::error::ShapeError;
use serde::Serialize;
use std::fmt;

/// Owned single-channel 8-bit buffer, row-major with `stride == width`.
///
/// Buffers are value objects: every pipeline stage produces a fresh buffer
/// and never mutates its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a buffer from raw bytes; `data.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ShapeError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(ShapeError::BufferLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer of the given size with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixel values in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().copied()
    }
}

/// Ordered triple of equally-sized channel buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImage {
    channels: [PixelBuffer; 3],
}

impl ColorImage {
    /// Build an image from three channels; their dimensions must match.
    pub fn new(c0: PixelBuffer, c1: PixelBuffer, c2: PixelBuffer) -> Result<Self, ShapeError> {
        let expected = (c0.width(), c0.height());
        for channel in [&c1, &c2] {
            let found = (channel.width(), channel.height());
            if found != expected {
                return Err(ShapeError::ChannelMismatch { expected, found });
            }
        }
        Ok(Self {
            channels: [c0, c1, c2],
        })
    }

    pub fn width(&self) -> usize {
        self.channels[0].width()
    }

    pub fn height(&self) -> usize {
        self.channels[0].height()
    }

    pub fn channels(&self) -> &[PixelBuffer; 3] {
        &self.channels
    }

    pub(crate) fn into_channels(self) -> [PixelBuffer; 3] {
        self.channels
    }
}

/// Channel identity in codec order, used for labelling artifacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLabel {
    Red,
    Green,
    Blue,
}

impl ChannelLabel {
    /// All labels in the order channels appear in a [`ColorImage`].
    pub const ALL: [ChannelLabel; 3] = [ChannelLabel::Red, ChannelLabel::Green, ChannelLabel::Blue];

    /// Lower-case name used in artifact filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelLabel::Red => "red",
            ChannelLabel::Green => "green",
            ChannelLabel::Blue => "blue",
        }
    }
}

impl fmt::Display for ChannelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
