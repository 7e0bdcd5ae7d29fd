//! Plain color-model value types.
//!
//! All components are stored at full precision. Unless noted, components are
//! fractions in the unit interval; hue is a fraction of a full turn.

use serde::{Deserialize, Serialize};

/// sRGB with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue, saturation, lightness. `h` is in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Hue in degrees, [0, 360).
    pub fn hue_degrees(&self) -> f64 {
        self.h.rem_euclid(1.0) * 360.0
    }
}

/// Hue, saturation, value. `h` is in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Subtractive cyan, magenta, yellow, key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// CIE 1931 XYZ under D65, Y of white = 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIELAB. `l` in [0, 100]; `a` and `b` unbounded, roughly ±128.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Cylindrical CIELAB. `h` in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}
