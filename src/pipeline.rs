//! Pipeline driving per-channel equalization end-to-end.
//!
//! The flow is split → per channel (pre histogram → remap table → apply →
//! post histogram) → merge. The three channels share no state, so they run
//! as parallel tasks and join before the merge. Every stage is a bounded,
//! deterministic computation over an in-memory buffer; the only failure
//! modes are the shape checks at split and merge.
//!
//! Typical usage:
//! ```no_run
//! use channel_equalizer::prelude::*;
//!
//! # fn example(image: ColorImage) {
//! let report = process(image).expect("well-formed image");
//! println!("equalized in {:.3} ms", report.total_latency_ms);
//! # }
//! ```

use crate::channels::{merge, split};
use crate::diagnostics::{ChannelTrace, EqualizeReport};
use crate::equalize::RemapTable;
use crate::error::ShapeError;
use crate::histogram::Histogram;
use crate::types::{ChannelLabel, ColorImage, PixelBuffer};
use log::debug;
use std::time::Instant;

/// Equalize every channel of `image` independently.
///
/// Returns the merged result together with the pre/post histograms and the
/// remap table of each channel.
pub fn process(image: ColorImage) -> Result<EqualizeReport, ShapeError> {
    let (width, height) = (image.width(), image.height());
    debug!("equalize start w={} h={}", width, height);
    let total_start = Instant::now();

    let [c0, c1, c2] = split(image)?;
    let [red, green, blue] = ChannelLabel::ALL;
    let ((r0, r1), r2) = rayon::join(
        || {
            rayon::join(
                || equalize_channel(red, c0),
                || equalize_channel(green, c1),
            )
        },
        || equalize_channel(blue, c2),
    );
    let (b0, t0) = r0;
    let (b1, t1) = r1;
    let (b2, t2) = r2;

    let image = merge(b0, b1, b2)?;
    let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    debug!("equalize done in {:.3} ms", total_latency_ms);

    Ok(EqualizeReport {
        image,
        width,
        height,
        channels: [t0, t1, t2],
        total_latency_ms,
    })
}

fn equalize_channel(label: ChannelLabel, buffer: PixelBuffer) -> (PixelBuffer, ChannelTrace) {
    let start = Instant::now();
    let pre = Histogram::from_buffer(&buffer);
    let table = RemapTable::from_histogram(&pre);
    let equalized = table.apply(&buffer);
    let post = Histogram::from_buffer(&equalized);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "channel {} equalized in {:.3} ms identity={}",
        label,
        elapsed_ms,
        table.is_identity()
    );
    (
        equalized,
        ChannelTrace {
            label,
            pre,
            post,
            table,
            elapsed_ms,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_channel(width: usize, height: usize, step: u8) -> PixelBuffer {
        let data = (0..width * height)
            .map(|i| (i as u8).wrapping_mul(step))
            .collect();
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn process_preserves_shape_and_counts() {
        let image = ColorImage::new(
            gradient_channel(8, 8, 1),
            gradient_channel(8, 8, 3),
            gradient_channel(8, 8, 7),
        )
        .unwrap();
        let report = process(image).unwrap();

        assert_eq!((report.width, report.height), (8, 8));
        assert_eq!((report.image.width(), report.image.height()), (8, 8));
        for trace in &report.channels {
            assert_eq!(trace.pre.total(), 64, "{}: pre counts", trace.label);
            assert_eq!(trace.post.total(), 64, "{}: post counts", trace.label);
        }
    }

    #[test]
    fn channels_are_processed_independently() {
        // A flat channel passes through untouched no matter what the other
        // channels contain.
        let flat = PixelBuffer::filled(4, 4, 200);
        let image = ColorImage::new(
            gradient_channel(4, 4, 16),
            flat.clone(),
            gradient_channel(4, 4, 5),
        )
        .unwrap();
        let report = process(image).unwrap();

        assert_eq!(report.image.channels()[1], flat);
        assert!(report.channels[1].table.is_identity());
        assert!(
            !report.channels[0].table.is_identity(),
            "gradient channel should be remapped"
        );
    }

    #[test]
    fn process_rejects_empty_image() {
        let empty = PixelBuffer::new(3, 0, Vec::new()).unwrap();
        let image = ColorImage::new(empty.clone(), empty.clone(), empty).unwrap();
        assert!(matches!(
            process(image),
            Err(ShapeError::EmptyImage {
                width: 3,
                height: 0
            })
        ));
    }

    #[test]
    fn labels_follow_channel_order() {
        let image = ColorImage::new(
            PixelBuffer::filled(2, 2, 1),
            PixelBuffer::filled(2, 2, 2),
            PixelBuffer::filled(2, 2, 3),
        )
        .unwrap();
        let report = process(image).unwrap();
        let labels: Vec<_> = report.channels.iter().map(|t| t.label).collect();
        assert_eq!(labels, ChannelLabel::ALL);
    }
}
