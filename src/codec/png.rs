use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::foundation::{
    buffer::{BYTES_PER_PIXEL, PixelBuffer},
    error::{GlitchError, GlitchResult},
};

/// How strictly [`decode_png`] treats non-RGBA inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Accept 8-bit RGBA, gray+alpha and opaque RGB; anything else is an error.
    #[default]
    Strict,
    /// Convert any decodable image to 8-bit RGBA.
    Convert,
}

/// Decode PNG bytes into an RGBA8 pixel buffer.
pub fn decode_png(bytes: &[u8], mode: DecodeMode) -> GlitchResult<PixelBuffer> {
    let dyn_img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .context("decode png from memory")?;
    let rgba = match dyn_img {
        DynamicImage::ImageRgba8(img) => img,
        DynamicImage::ImageRgb8(img) => DynamicImage::ImageRgb8(img).to_rgba8(),
        DynamicImage::ImageLumaA8(img) => DynamicImage::ImageLumaA8(img).to_rgba8(),
        other if mode == DecodeMode::Convert => other.to_rgba8(),
        other => {
            return Err(GlitchError::unsupported_pixel_format(format!(
                "{:?} (expected 8-bit RGBA, gray+alpha or RGB)",
                other.color()
            )));
        }
    };

    let (width, height) = rgba.dimensions();
    let width = width as usize;
    PixelBuffer::from_raw(
        width,
        height as usize,
        width * BYTES_PER_PIXEL,
        rgba.into_raw(),
    )
}

/// Encode a pixel buffer as an 8-bit RGBA PNG, favoring speed over size.
pub fn encode_png(buf: &PixelBuffer) -> GlitchResult<Vec<u8>> {
    let width = u32::try_from(buf.width())
        .map_err(|_| GlitchError::buffer("image width exceeds PNG limits"))?;
    let height = u32::try_from(buf.height())
        .map_err(|_| GlitchError::buffer("image height exceeds PNG limits"))?;

    let mut out = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut out),
        CompressionType::Fast,
        FilterType::NoFilter,
    );
    encoder
        .write_image(&buf.to_packed(), width, height, ExtendedColorType::Rgba8)
        .context("encode png")?;
    Ok(out)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path, mode: DecodeMode) -> GlitchResult<PixelBuffer> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read png '{}'", path.display()))?;
    decode_png(&bytes, mode)
}

/// Encode and write a PNG file, creating the parent directory if needed.
pub fn write_png(path: &Path, buf: &PixelBuffer) -> GlitchResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let bytes = encode_png(buf)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/png.rs"]
mod tests;
