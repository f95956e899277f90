//! Linear RGB colors.
//!
//! Channels are nominally in `[0, 1]` but are never clamped while tracing;
//! saturation happens only when converting to bytes.

use image::Rgb;

use crate::error::ColorError;
use crate::vec3::Vec3;

pub type Color = Vec3<f64>;

impl Vec3<f64> {
    pub const BLACK: Color = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const WHITE: Color = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Vec3::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Parses `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());

        Ok(Color::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Quantizes to 8 bits per channel, saturating out-of-range values.
    #[inline]
    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb([to_byte(self.x), to_byte(self.y), to_byte(self.z)])
    }
}

#[inline]
fn to_byte(c: f64) -> u8 {
    (c * 255.0).max(0.0).min(255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(Ok(Color::from_rgb(0x19, 0x19, 0x70)), Color::from_hex("#191970"));
        assert_eq!(Ok(Color::WHITE), Color::from_hex("#FFFFFF"));
        assert_eq!(Ok(Color::BLACK), Color::from_hex("#000000"));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(Color::from_hex("191970").is_err());
        assert!(Color::from_hex("#19197").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_rgb_clamps_and_rounds() {
        assert_eq!(Rgb([255, 0, 128]), Color::new(1.7, -0.3, 0.5).to_rgb());
        assert_eq!(Rgb([0x19, 0x19, 0x70]), Color::from_rgb(0x19, 0x19, 0x70).to_rgb());
    }

    #[test]
    fn rgb_round_trip_is_lossy() {
        let c = Color::new(0.1234, 0.5, 0.9);
        let back = {
            let Rgb([r, g, b]) = c.to_rgb();
            Color::from_rgb(r, g, b)
        };

        assert_ne!(c, back);
        assert!((c - back).len() < 1.0 / 255.0);
    }
}
