//! Canonical color type and conversions between color models
//!
//! Every operation in the crate funnels through [`Color`], an sRGB triplet of
//! 8-bit channels. Other models (HSL, HSV, CMYK, XYZ, Lab, LCH) are derived
//! from it on demand and converted back through the functions in [`convert`].
//!
//! Input arrives either as a tagged [`ColorSpec`] or as a free-form string
//! handled by [`parse_color`].

pub mod convert;
pub mod hex;
pub mod model;
mod parse;
mod spec;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub use model::{Cmyk, Hsl, Hsv, Lab, Lch, Rgb, Xyz};
pub use parse::parse_color;
pub use spec::{CmykSpec, ColorSpec, HslSpec, HsvSpec, RgbSpec};

/// Error type for color validation and parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input could not be read as any supported color notation
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),
    /// Input was well-formed but a component fell outside its range
    #[error("{0}")]
    OutOfRange(String),
    /// No color representation was supplied at all
    #[error("No color provided. Expected one of: rgb, hex, hsl, hsv, cmyk or a color string.")]
    MissingRepresentation,
    /// A non-color argument was invalid (unknown mode, too few colors, ...)
    #[error("{0}")]
    InvalidArgument(String),
}

/// An sRGB color with 8-bit channels.
///
/// Serializes as an upper-case `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Mid gray used as the mixing target for tones
    pub const GRAY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unit-interval channels, clamping and rounding each.
    pub fn from_fractions(r: f64, g: f64, b: f64) -> Self {
        Self { r: quantize(r), g: quantize(g), b: quantize(b) }
    }

    /// Parse a 3 or 6 digit hex string, with or without `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex::parse_hex(s)
    }

    /// Canonical upper-case `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Hex form without the leading `#`.
    pub fn clean_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgb(&self) -> Rgb {
        Rgb { r: self.r as f64 / 255.0, g: self.g as f64 / 255.0, b: self.b as f64 / 255.0 }
    }

    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(self.to_rgb())
    }

    pub fn to_hsv(&self) -> Hsv {
        convert::rgb_to_hsv(self.to_rgb())
    }

    pub fn to_cmyk(&self) -> Cmyk {
        convert::rgb_to_cmyk(self.to_rgb())
    }

    pub fn to_xyz(&self) -> Xyz {
        convert::rgb_to_xyz(self.to_rgb())
    }

    pub fn to_lab(&self) -> Lab {
        convert::xyz_to_lab(self.to_xyz())
    }

    pub fn to_lch(&self) -> Lch {
        convert::lab_to_lch(self.to_lab())
    }
}

/// Clamp a unit-interval channel and round it to 0..=255.
pub(crate) fn quantize(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_fractions(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        convert::hsl_to_rgb(hsl).into()
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        convert::hsv_to_rgb(hsv).into()
    }
}

impl From<Cmyk> for Color {
    fn from(cmyk: Cmyk) -> Self {
        convert::cmyk_to_rgb(cmyk).into()
    }
}

impl From<Xyz> for Color {
    fn from(xyz: Xyz) -> Self {
        convert::xyz_to_rgb(xyz).into()
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        convert::xyz_to_rgb(convert::lab_to_xyz(lab)).into()
    }
}

impl From<Lch> for Color {
    fn from(lch: Lch) -> Self {
        convert::lch_to_lab(lch).into()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        let c = Color::new(255, 87, 51);
        assert_eq!(c.to_hex(), "#FF5733");
        assert_eq!(c.clean_hex(), "FF5733");
        assert_eq!(c.to_string(), "#FF5733");
    }

    #[test]
    fn test_from_fractions_clamps() {
        assert_eq!(Color::from_fractions(1.2, -0.1, 0.5), Color::new(255, 0, 128));
        assert_eq!(Color::from_fractions(f64::NAN, 0.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::new(0, 87, 184)).unwrap();
        assert_eq!(json, "\"#0057B8\"");
        let back: Color = serde_json::from_str("\"#0057b8\"").unwrap();
        assert_eq!(back, Color::new(0, 87, 184));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Color, _> = serde_json::from_str("\"not a color\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str() {
        let c: Color = "rgb(0, 128, 255)".parse().unwrap();
        assert_eq!(c, Color::new(0, 128, 255));
    }
}
