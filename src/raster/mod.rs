use crate::error::{ColormapError, Result};
use crate::models::ColorStop;
use crate::traits::Rasterizer;
use image::{ExtendedColorType, ImageEncoder, RgbImage, codecs::png::PngEncoder};
use std::io::Cursor;
use std::path::Path;

pub mod idw;

pub use idw::InverseDistance;

/// Largest accepted raster side.
pub const MAX_DIMENSION: u32 = 16_384;

/// Both sides must be in `1..=MAX_DIMENSION`.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ColormapError::InvalidInput(format!(
            "raster size must be positive, got {}x{}",
            width, height
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ColormapError::InvalidInput(format!(
            "raster size {}x{} exceeds the {}x{} limit",
            width, height, MAX_DIMENSION, MAX_DIMENSION
        )));
    }
    Ok(())
}

/// Encode an 8-bit RGB PNG in memory.
pub fn encode_png(img: &RgbImage, path: &Path) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    PngEncoder::new(Cursor::new(&mut png_data))
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| ColormapError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(png_data)
}

/// Write `img` to `path`, replacing whatever was there. Returns the byte count.
pub fn write_png(img: &RgbImage, path: &Path) -> Result<u64> {
    let bytes = encode_png(img, path)?;
    std::fs::write(path, &bytes).map_err(|e| ColormapError::fs(path, e))?;
    Ok(bytes.len() as u64)
}

/// Rasterize `stops` and write the result to `path`.
pub fn create(
    rasterizer: &dyn Rasterizer,
    path: &Path,
    width: u32,
    height: u32,
    stops: &[ColorStop],
) -> Result<u64> {
    let img = rasterizer.rasterize(stops, width, height)?;
    write_png(&img, path)
}
