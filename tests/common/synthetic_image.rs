use channel_equalizer::{ColorImage, PixelBuffer};

/// Generates a horizontal ramp covering the full intensity range.
pub fn gradient_u8(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 1 && height > 0, "image dimensions must be positive");

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            data[y * width + x] = (x * 255 / (width - 1)) as u8;
        }
    }
    PixelBuffer::new(width, height, data).expect("ramp buffer matches its dimensions")
}

/// Generates a constant-valued channel.
pub fn flat_u8(width: usize, height: usize, value: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, value)
}

/// Generates a channel whose top half is `low` and bottom half is `high`.
pub fn two_tone_u8(width: usize, height: usize, low: u8, high: u8) -> PixelBuffer {
    assert!(width > 0 && height > 1, "image dimensions must be positive");

    let mut data = vec![low; width * height];
    for y in height / 2..height {
        for x in 0..width {
            data[y * width + x] = high;
        }
    }
    PixelBuffer::new(width, height, data).expect("two-tone buffer matches its dimensions")
}

/// A color image exercising three different channel shapes at once:
/// a full ramp, a narrow two-tone split, and a flat plane.
pub fn rgb_test_image(width: usize, height: usize) -> ColorImage {
    ColorImage::new(
        gradient_u8(width, height),
        two_tone_u8(width, height, 60, 90),
        flat_u8(width, height, 200),
    )
    .expect("channels share dimensions")
}
