use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, ImageReader, RgbaImage};

use crate::error::{OverpressError, OverpressResult};

/// Opens and decodes an image into straight-alpha RGBA8. The container format
/// is sniffed from the file content, not the extension; PNG and JPEG are the
/// supported inputs.
pub fn load_image(path: &Path) -> OverpressResult<RgbaImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff image format '{}'", path.display()))?;

    let img = reader
        .decode()
        .map_err(|e| OverpressError::decode(format!("decode '{}': {e}", path.display())))?;
    Ok(img.to_rgba8())
}

/// Writes `img` as 8-bit RGBA PNG, creating the parent directory if missing.
/// Either a complete PNG is written and `Ok` returned, or the error aborts
/// the run; a failed write is never reported as success.
pub fn save_png(path: &Path, img: &RgbaImage) -> OverpressResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| OverpressError::encode(format!("write png '{}': {e}", path.display())))
}
