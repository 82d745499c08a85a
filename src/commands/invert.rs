//! Image color inversion.
//!
//! Decodes an image, complements every RGB channel, and saves the result
//! next to the source with a `_neg` suffix.

use crate::logger::Logger;
use image::ImageReader;
use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output path: `<stem>_neg<ext>` alongside the input.
pub fn negative_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = OsString::from(stem);
    name.push("_neg");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Invert the image at `path` and save the negative next to it.
pub fn run(path: &Path) -> Result<(), Box<dyn Error>> {
    Logger::file_operation("Inverting", path);

    let img = ImageReader::open(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?
        .with_guessed_format()?
        .decode()
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let mut rgb = img.to_rgb8();
    image::imageops::invert(&mut rgb);

    let output = negative_path(path);
    rgb.save(&output)
        .map_err(|e| format!("Failed to save {}: {}", output.display(), e))?;

    Logger::success(&format!("Saved {}", output.display()));
    Ok(())
}
