//! Free-form color string parsing
//!
//! Supports the following formats:
//! - Hex: `#RGB`, `#RRGGBB`, and the same without `#`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsb()`, `cmyk()`
//! - Named: entries of the built-in name table (`Alice Blue`, `tomato`, ...)
//! - Anything else CSS understands: `hwb()`, `lab()`, `oklch()`, ...

use lazy_static::lazy_static;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use regex::Regex;

use super::spec::{CmykSpec, ColorSpec, HslSpec, HsvSpec, RgbSpec};
use super::{hex, Color, ColorError};
use crate::named;

lazy_static! {
    static ref FUNCTIONAL: Regex = Regex::new(r"(?i)^(rgba?|hsla?|hsv|hsb|cmyk)\s*\(\s*([^)]*)\)$")
        .expect("functional color pattern is valid");
    static ref ARG_SEPARATOR: Regex =
        Regex::new(r"[\s,/]+").expect("argument separator pattern is valid");
}

/// Parse a free-form color string.
///
/// ```
/// use chromakit::color::{parse_color, Color};
///
/// assert_eq!(parse_color("#F00").unwrap(), Color::new(255, 0, 0));
/// assert_eq!(parse_color("hsl(120, 100%, 50%)").unwrap(), Color::new(0, 255, 0));
/// assert_eq!(parse_color("rgb(0.5, 0.5, 0.5)").unwrap(), Color::new(128, 128, 128));
/// assert_eq!(parse_color("Alice Blue").unwrap(), Color::new(240, 248, 255));
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for unreadable input and
/// [`ColorError::OutOfRange`] when functional notation has bad components.
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::InvalidFormat("empty color string".to_string()));
    }

    if s.starts_with('#') || hex::looks_like_hex(s) {
        return hex::parse_hex(s);
    }

    if let Some(caps) = FUNCTIONAL.captures(s) {
        let function = caps[1].to_ascii_lowercase();
        return parse_functional(&function, &caps[2], s);
    }

    if let Some(entry) = named::find_by_name(s) {
        return Ok(entry.color);
    }

    parse_css_color(s)
}

/// A numeric argument with any `%`/`deg` suffix stripped.
struct Arg {
    value: f64,
    percent: bool,
    has_point: bool,
}

fn parse_functional(function: &str, args: &str, original: &str) -> Result<Color, ColorError> {
    let args: Vec<Arg> = ARG_SEPARATOR
        .split(args.trim())
        .filter(|t| !t.is_empty())
        .map(|t| parse_arg(t, original))
        .collect::<Result<_, _>>()?;

    let expected = if function == "cmyk" { 4..=4 } else { 3..=4 };
    if !expected.contains(&args.len()) {
        return Err(ColorError::InvalidFormat(format!(
            "'{}' has {} components, {}() takes {}",
            original,
            args.len(),
            function,
            if function == "cmyk" { "4" } else { "3 (plus optional alpha)" }
        )));
    }

    // Alpha is accepted and ignored for the three-component models
    let components = if function == "cmyk" { &args[..4] } else { &args[..3] };
    let is_fraction = components.iter().any(|a| a.has_point && !a.percent)
        && components.iter().all(|a| a.value <= 1.0);
    let v: Vec<f64> = components.iter().map(|a| a.value).collect();

    let spec = match function {
        "rgb" | "rgba" => {
            // rgb(100%, 0%, 0%) means full red, not 100/255
            let channel = |a: &Arg| if a.percent { a.value * 2.55 } else { a.value };
            let pct = components.iter().any(|a| a.percent);
            ColorSpec::Rgb(RgbSpec {
                r: channel(&components[0]),
                g: channel(&components[1]),
                b: channel(&components[2]),
                is_fraction: is_fraction && !pct,
            })
        }
        "hsl" | "hsla" => ColorSpec::Hsl(HslSpec { h: v[0], s: v[1], l: v[2], is_fraction }),
        "hsv" | "hsb" => ColorSpec::Hsv(HsvSpec { h: v[0], s: v[1], v: v[2], is_fraction }),
        _ => ColorSpec::Cmyk(CmykSpec { c: v[0], m: v[1], y: v[2], k: v[3], is_fraction }),
    };
    spec.resolve()
}

fn parse_arg(token: &str, original: &str) -> Result<Arg, ColorError> {
    let lower = token.to_ascii_lowercase();
    let (number, percent) = if let Some(n) = lower.strip_suffix('%') {
        (n, true)
    } else if let Some(n) = lower.strip_suffix("deg") {
        (n, false)
    } else {
        (lower.as_str(), false)
    };
    let value = number.parse::<f64>().map_err(|_| {
        ColorError::InvalidFormat(format!("'{}' is not a number in '{}'", token, original))
    })?;
    Ok(Arg { value, percent, has_point: number.contains('.') })
}

/// Parse a CSS color using lightningcss (named colors, hwb, lab, oklch, ...)
fn parse_css_color(s: &str) -> Result<Color, ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|_| {
        ColorError::InvalidFormat(format!(
            "'{}' is not a recognized color. Use hex (#FF0000), rgb(), hsl(), hsv(), cmyk() \
             or a color name.",
            s
        ))
    })?;
    css_color_to_rgb(css_color)
}

/// Convert a lightningcss CssColor to an opaque sRGB color. Alpha is dropped.
fn css_color_to_rgb(color: CssColor) -> Result<Color, ColorError> {
    use lightningcss::values::color::FloatColor;

    let rgb_color = color
        .to_rgb()
        .map_err(|_| ColorError::InvalidFormat("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Color::new(rgba.red, rgba.green, rgba.blue)),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => {
                Ok(Color::from_fractions(rgb.r as f64, rgb.g as f64, rgb.b as f64))
            }
            _ => Err(ColorError::InvalidFormat("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::InvalidFormat("color conversion did not produce RGB".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_with_and_without_hash() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("0f0").unwrap(), Color::new(0, 255, 0));
    }

    #[test]
    fn test_bad_hex_is_not_sent_to_css() {
        let err = parse_color("#GGG").unwrap_err();
        assert!(err.to_string().contains("hex"));
    }

    #[test]
    fn test_rgb_functional() {
        assert_eq!(parse_color("rgb(255, 87, 51)").unwrap(), Color::new(255, 87, 51));
        assert_eq!(parse_color("RGB(255 87 51)").unwrap(), Color::new(255, 87, 51));
        assert_eq!(parse_color("rgba(255, 87, 51, 0.5)").unwrap(), Color::new(255, 87, 51));
        assert_eq!(parse_color("rgb(100%, 0%, 0%)").unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn test_rgb_fraction_detection() {
        assert_eq!(parse_color("rgb(1.0, 0.5, 0)").unwrap(), Color::new(255, 128, 0));
        // Integers only: never fraction mode even when all are <= 1
        assert_eq!(parse_color("rgb(1, 0, 1)").unwrap(), Color::new(1, 0, 1));
    }

    #[test]
    fn test_hsl_and_hsv_functional() {
        assert_eq!(parse_color("hsl(240deg, 100%, 50%)").unwrap(), Color::new(0, 0, 255));
        assert_eq!(parse_color("hsla(0, 100%, 50%, 0.3)").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("hsv(120, 100%, 100%)").unwrap(), Color::new(0, 255, 0));
        assert_eq!(parse_color("hsb(0, 0, 100)").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_cmyk_functional() {
        assert_eq!(parse_color("cmyk(0, 100, 100, 0)").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("cmyk(0%, 0%, 0%, 100%)").unwrap(), Color::BLACK);
        assert!(parse_color("cmyk(0, 100, 100)").is_err());
    }

    #[test]
    fn test_functional_out_of_range() {
        let err = parse_color("rgb(300, 0, 0)").unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange(_)));
        let err = parse_color("hsl(0, 150%, 50%)").unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange(_)));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("Rebecca Purple").unwrap(), Color::new(102, 51, 153));
        assert_eq!(parse_color("  DarkSlateGray ").unwrap(), Color::new(47, 79, 79));
    }

    #[test]
    fn test_css_fallback() {
        assert_eq!(parse_color("hwb(0 0% 0%)").unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(parse_color(""), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(parse_color("   "), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(parse_color("not-a-color"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(parse_color("rgb(a, b, c)"), Err(ColorError::InvalidFormat(_))));
    }
}
