//! Channel decomposition and recomposition.
//!
//! `split`/`merge` move whole planes between a [`ColorImage`] and its three
//! channel buffers. `from_interleaved`/`to_interleaved` adapt the packed
//! RGB byte layout spoken by the image codec to the planar layout the
//! pipeline works on.

use crate::error::ShapeError;
use crate::types::{ColorImage, PixelBuffer};

/// Split an image into its three channels in original order.
///
/// Rejects images with zero width or height; downstream stages assume at
/// least one pixel per channel when reporting, even though the transforms
/// themselves are total.
pub fn split(image: ColorImage) -> Result<[PixelBuffer; 3], ShapeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ShapeError::EmptyImage { width, height });
    }
    Ok(image.into_channels())
}

/// Merge three equally-sized channels back into an image.
pub fn merge(c0: PixelBuffer, c1: PixelBuffer, c2: PixelBuffer) -> Result<ColorImage, ShapeError> {
    ColorImage::new(c0, c1, c2)
}

/// Deinterleave packed `[r, g, b, r, g, b, ...]` bytes into channel planes.
pub fn from_interleaved(
    width: usize,
    height: usize,
    data: &[u8],
) -> Result<ColorImage, ShapeError> {
    let pixels = width * height;
    if data.len() != pixels * 3 {
        return Err(ShapeError::BufferLength {
            expected: pixels * 3,
            found: data.len(),
        });
    }

    let mut planes = [
        Vec::with_capacity(pixels),
        Vec::with_capacity(pixels),
        Vec::with_capacity(pixels),
    ];
    for px in data.chunks_exact(3) {
        planes[0].push(px[0]);
        planes[1].push(px[1]);
        planes[2].push(px[2]);
    }
    let [p0, p1, p2] = planes;
    ColorImage::new(
        PixelBuffer::new(width, height, p0)?,
        PixelBuffer::new(width, height, p1)?,
        PixelBuffer::new(width, height, p2)?,
    )
}

/// Reinterleave channel planes into packed RGB bytes for the codec.
pub fn to_interleaved(image: &ColorImage) -> Vec<u8> {
    let [c0, c1, c2] = image.channels();
    let mut data = Vec::with_capacity(c0.len() * 3);
    for i in 0..c0.len() {
        data.push(c0.as_slice()[i]);
        data.push(c1.as_slice()[i]);
        data.push(c2.as_slice()[i]);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> ColorImage {
        let c0 = PixelBuffer::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        let c1 = PixelBuffer::new(2, 2, vec![5, 6, 7, 8]).unwrap();
        let c2 = PixelBuffer::new(2, 2, vec![9, 10, 11, 12]).unwrap();
        ColorImage::new(c0, c1, c2).unwrap()
    }

    #[test]
    fn split_then_merge_round_trips() {
        let image = sample_image();
        let original = image.clone();
        let [c0, c1, c2] = split(image).unwrap();
        let merged = merge(c0, c1, c2).unwrap();
        assert_eq!(merged, original);
    }

    #[test]
    fn split_rejects_empty_image() {
        let empty = PixelBuffer::new(0, 4, Vec::new()).unwrap();
        let image = ColorImage::new(empty.clone(), empty.clone(), empty).unwrap();
        let err = split(image).unwrap_err();
        assert_eq!(
            err,
            ShapeError::EmptyImage {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn merge_rejects_mismatched_dimensions() {
        let c0 = PixelBuffer::filled(2, 2, 0);
        let c1 = PixelBuffer::filled(2, 2, 0);
        let c2 = PixelBuffer::filled(3, 2, 0);
        assert!(matches!(
            merge(c0, c1, c2),
            Err(ShapeError::ChannelMismatch { .. })
        ));
    }

    #[test]
    fn interleave_round_trips() {
        let image = sample_image();
        let packed = to_interleaved(&image);
        assert_eq!(packed, vec![1, 5, 9, 2, 6, 10, 3, 7, 11, 4, 8, 12]);
        let rebuilt = from_interleaved(2, 2, &packed).unwrap();
        assert_eq!(rebuilt, image);
    }

    #[test]
    fn from_interleaved_checks_length() {
        assert!(matches!(
            from_interleaved(2, 2, &[0u8; 11]),
            Err(ShapeError::BufferLength {
                expected: 12,
                found: 11
            })
        ));
    }
}
