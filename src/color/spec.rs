//! Tagged color input and its validation.

use serde::{Deserialize, Serialize};

use super::model::{Cmyk, Hsl, Hsv};
use super::{hex, parse_color, Color, ColorError};

/// RGB components, either 0-255 or fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct RgbSpec {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Components are fractions in [0, 1] instead of 0-255
    #[serde(default)]
    pub is_fraction: bool,
}

/// HSL components: hue 0-360, saturation/lightness 0-100, or all fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct HslSpec {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    /// Components are fractions in [0, 1]
    #[serde(default)]
    pub is_fraction: bool,
}

/// HSV components: hue 0-360, saturation/value 0-100, or all fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct HsvSpec {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    /// Components are fractions in [0, 1]
    #[serde(default)]
    pub is_fraction: bool,
}

/// CMYK components, 0-100 each or fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct CmykSpec {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
    /// Components are fractions in [0, 1]
    #[serde(default)]
    pub is_fraction: bool,
}

/// A color as supplied by a caller, before validation.
///
/// JSON uses external tagging (`{"hex": "FF0000"}`,
/// `{"rgb": {"r": 255, "g": 0, "b": 0}}`); a bare string is free-form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpec {
    Hex(String),
    Rgb(RgbSpec),
    Hsl(HslSpec),
    Hsv(HsvSpec),
    Cmyk(CmykSpec),
    #[serde(untagged)]
    Text(String),
}

impl ColorSpec {
    /// Pick one representation out of a set of optional fields.
    ///
    /// Precedence is rgb, hex, hsl, hsv, cmyk, then free-form text.
    pub fn from_fields(
        rgb: Option<RgbSpec>,
        hex: Option<String>,
        hsl: Option<HslSpec>,
        hsv: Option<HsvSpec>,
        cmyk: Option<CmykSpec>,
        text: Option<String>,
    ) -> Result<ColorSpec, ColorError> {
        if let Some(rgb) = rgb {
            return Ok(ColorSpec::Rgb(rgb));
        }
        if let Some(hex) = hex {
            return Ok(ColorSpec::Hex(hex));
        }
        if let Some(hsl) = hsl {
            return Ok(ColorSpec::Hsl(hsl));
        }
        if let Some(hsv) = hsv {
            return Ok(ColorSpec::Hsv(hsv));
        }
        if let Some(cmyk) = cmyk {
            return Ok(ColorSpec::Cmyk(cmyk));
        }
        text.map(ColorSpec::Text).ok_or(ColorError::MissingRepresentation)
    }

    /// Validate the components and produce the canonical color.
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            ColorSpec::Hex(s) => hex::parse_hex(s),
            ColorSpec::Text(s) => parse_color(s),
            ColorSpec::Rgb(spec) => resolve_rgb(spec),
            ColorSpec::Hsl(spec) => resolve_hsl(spec),
            ColorSpec::Hsv(spec) => resolve_hsv(spec),
            ColorSpec::Cmyk(spec) => resolve_cmyk(spec),
        }
    }
}

fn in_range(v: f64, max: f64) -> bool {
    v >= 0.0 && v <= max
}

fn range_text(is_fraction: bool, natural: &str) -> String {
    if is_fraction {
        "fractions between 0 and 1".to_string()
    } else {
        natural.to_string()
    }
}

fn resolve_rgb(spec: &RgbSpec) -> Result<Color, ColorError> {
    let max = if spec.is_fraction { 1.0 } else { 255.0 };
    if ![spec.r, spec.g, spec.b].iter().all(|&v| in_range(v, max)) {
        return Err(ColorError::OutOfRange(format!(
            "Invalid RGB values: r={}, g={}, b={}. Expected {}.",
            spec.r,
            spec.g,
            spec.b,
            range_text(spec.is_fraction, "integers between 0 and 255")
        )));
    }
    if spec.is_fraction {
        Ok(Color::from_fractions(spec.r, spec.g, spec.b))
    } else {
        Ok(Color::new(spec.r.round() as u8, spec.g.round() as u8, spec.b.round() as u8))
    }
}

/// Shared range check for the hue-based models. Returns unit fractions.
fn hue_triplet(
    model: &str,
    names: [&str; 3],
    values: [f64; 3],
    is_fraction: bool,
) -> Result<[f64; 3], ColorError> {
    let [h, a, b] = values;
    let ok = if is_fraction {
        values.iter().all(|&v| in_range(v, 1.0))
    } else {
        in_range(h, 360.0) && in_range(a, 100.0) && in_range(b, 100.0)
    };
    if !ok {
        return Err(ColorError::OutOfRange(format!(
            "Invalid {} values: {}={}, {}={}, {}={}. Expected {}.",
            model,
            names[0],
            h,
            names[1],
            a,
            names[2],
            b,
            range_text(
                is_fraction,
                &format!(
                    "{} between 0 and 360, {} and {} between 0 and 100",
                    names[0], names[1], names[2]
                )
            )
        )));
    }
    if is_fraction {
        Ok(values)
    } else {
        Ok([h / 360.0, a / 100.0, b / 100.0])
    }
}

fn resolve_hsl(spec: &HslSpec) -> Result<Color, ColorError> {
    let [h, s, l] =
        hue_triplet("HSL", ["h", "s", "l"], [spec.h, spec.s, spec.l], spec.is_fraction)?;
    Ok(Hsl { h, s, l }.into())
}

fn resolve_hsv(spec: &HsvSpec) -> Result<Color, ColorError> {
    let [h, s, v] =
        hue_triplet("HSV", ["h", "s", "v"], [spec.h, spec.s, spec.v], spec.is_fraction)?;
    Ok(Hsv { h, s, v }.into())
}

fn resolve_cmyk(spec: &CmykSpec) -> Result<Color, ColorError> {
    let max = if spec.is_fraction { 1.0 } else { 100.0 };
    let values = [spec.c, spec.m, spec.y, spec.k];
    if !values.iter().all(|&v| in_range(v, max)) {
        return Err(ColorError::OutOfRange(format!(
            "Invalid CMYK values: c={}, m={}, y={}, k={}. Expected {}.",
            spec.c,
            spec.m,
            spec.y,
            spec.k,
            range_text(spec.is_fraction, "percentages between 0 and 100")
        )));
    }
    let [c, m, y, k] = values.map(|v| v / max);
    Ok(Cmyk { c, m, y, k }.into())
}
