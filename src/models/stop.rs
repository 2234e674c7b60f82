use crate::error::{ColormapError, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};

/// An anchor point seeding the gradient: raster coordinate plus the colour it pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub x: u32,
    pub y: u32,
    #[serde(with = "hex_color")]
    pub color: Rgb<u8>,
}

impl ColorStop {
    pub fn new(x: u32, y: u32, color: Rgb<u8>) -> Self {
        ColorStop { x, y, color }
    }

    /// Build a stop from a hex literal, see [`parse_hex`].
    pub fn parse(x: u32, y: u32, hex: &str) -> Result<Self> {
        Ok(ColorStop::new(x, y, parse_hex(hex)?))
    }
}

/// Parse `#RRGGBB`. The bare `RRGGBB` form is accepted as well but logged,
/// since the shipped foliage table carries one such literal.
pub fn parse_hex(literal: &str) -> Result<Rgb<u8>> {
    let fail = |reason: &str| ColormapError::ColorParse {
        literal: literal.to_string(),
        reason: reason.to_string(),
    };

    let (digits, bare) = match literal.strip_prefix('#') {
        Some(rest) => (rest, false),
        None => (literal, true),
    };

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| fail("non-hex digit"))?;
    if nibbles.len() != 6 {
        return Err(fail("expected six hex digits"));
    }

    if bare {
        log::warn!("colour literal '{}' has no leading '#', reading it as #{}", literal, literal);
    }
    let channel = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];
    Ok(Rgb([channel(0), channel(2), channel(4)]))
}

/// Lower-case `#rrggbb` form.
pub fn to_hex(color: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

mod hex_color {
    use image::Rgb;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(color: &Rgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb<u8>, D::Error> {
        let literal = String::deserialize(deserializer)?;
        super::parse_hex(&literal).map_err(D::Error::custom)
    }
}
