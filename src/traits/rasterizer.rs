use crate::error::Result;
use crate::models::ColorStop;
use image::RgbImage;

/// Turns scattered colour stops into a dense `width` x `height` raster.
pub trait Rasterizer {
    fn rasterize(&self, stops: &[ColorStop], width: u32, height: u32) -> Result<RgbImage>;
}
