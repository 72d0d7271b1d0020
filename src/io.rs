//! I/O helpers for color images and JSON reports.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into planar channel buffers.
//! - `save_color_image`: write a [`ColorImage`] back through the codec.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! A missing input file is reported as [`PipelineError::InputMissing`]
//! before any decoding starts; the pipeline never runs on a guessed path.

use crate::channels;
use crate::error::PipelineError;
use crate::types::ColorImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to planar 8-bit RGB channels.
pub fn load_color_image(path: &Path) -> Result<ColorImage, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::InputMissing {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path)?.into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(channels::from_interleaved(width, height, &data)?)
}

/// Save a color image; the container format follows the file extension.
pub fn save_color_image(image_buf: &ColorImage, path: &Path) -> Result<(), PipelineError> {
    ensure_parent_dir(path)?;
    let data = channels::to_interleaved(image_buf);
    image::save_buffer(
        path,
        &data,
        image_buf.width() as u32,
        image_buf.height() as u32,
        image::ColorType::Rgb8,
    )?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
