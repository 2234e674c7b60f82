use crate::error::{ColormapError, Result};
use crate::models::ColorStop;
use crate::traits::Rasterizer;
use super::check_dimensions;
use colorgrad::Color;
use image::{Rgb, RgbImage};

/// Shepard inverse-distance weighting over every stop.
///
/// Each pixel is `sum(w_i * c_i) / sum(w_i)` with `w_i = 1 / d_i^power`, `d_i` being the
/// Euclidean pixel distance to stop `i`. Pixels sitting exactly on stops take the mean
/// colour of the stops there, so coincident stops carry equal weight and on-grid stops
/// reproduce their colour exactly. Blending happens in sRGB.
#[derive(Debug, Clone, Copy)]
pub struct InverseDistance {
    pub power: f32,
}

impl Default for InverseDistance {
    fn default() -> Self {
        InverseDistance { power: 2.0 }
    }
}

struct Anchor {
    x: u32,
    y: u32,
    color: Color,
}

impl InverseDistance {
    pub fn new(power: f32) -> Self {
        InverseDistance { power }
    }

    fn blend(&self, anchors: &[Anchor], px: u32, py: u32) -> Rgb<u8> {
        let mut on_stop = Accumulator::default();
        let mut weighted = Accumulator::default();
        let mut nearest: Option<(f64, &Anchor)> = None;

        for a in anchors {
            if a.x == px && a.y == py {
                on_stop.add(&a.color, 1.0);
                continue;
            }
            // u32 coordinates are exact in f64, so d2 > 0 here
            let dx = a.x as f64 - px as f64;
            let dy = a.y as f64 - py as f64;
            let d2 = dx * dx + dy * dy;
            // d^-p == (d^2)^(-p/2)
            weighted.add(&a.color, d2.powf(-0.5 * self.power as f64));
            if nearest.is_none_or(|(best, _)| d2 < best) {
                nearest = Some((d2, a));
            }
        }

        if on_stop.weight > 0.0 {
            on_stop.finish()
        } else if weighted.weight > 0.0 && weighted.weight.is_finite() {
            weighted.finish()
        } else {
            // every weight underflowed (or overflowed): take the closest stop
            let mut fallback = Accumulator::default();
            if let Some((_, a)) = nearest {
                fallback.add(&a.color, 1.0);
            }
            fallback.finish()
        }
    }
}

impl Rasterizer for InverseDistance {
    fn rasterize(&self, stops: &[ColorStop], width: u32, height: u32) -> Result<RgbImage> {
        check_dimensions(width, height)?;
        if stops.is_empty() {
            return Err(ColormapError::InvalidInput(
                "at least one colour stop is required".to_string(),
            ));
        }

        let anchors: Vec<Anchor> = stops
            .iter()
            .map(|s| {
                let Rgb([r, g, b]) = s.color;
                Anchor {
                    x: s.x,
                    y: s.y,
                    color: Color::from_rgba8(r, g, b, 255),
                }
            })
            .collect();

        Ok(RgbImage::from_fn(width, height, |x, y| {
            self.blend(&anchors, x, y)
        }))
    }
}

#[derive(Default)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
    weight: f64,
}

impl Accumulator {
    fn add(&mut self, color: &Color, w: f64) {
        self.r += color.r as f64 * w;
        self.g += color.g as f64 * w;
        self.b += color.b as f64 * w;
        self.weight += w;
    }

    fn finish(&self) -> Rgb<u8> {
        let mixed = Color::new(
            (self.r / self.weight) as f32,
            (self.g / self.weight) as f32,
            (self.b / self.weight) as f32,
            1.0,
        );
        let [r, g, b, _] = mixed.to_rgba8();
        Rgb([r, g, b])
    }
}
