//! Color manipulation: HSL adjustments, hue rotation, mixing and minification.
//!
//! Amounts are fractions in [0, 1] and are clamped; results are clamped back
//! into the sRGB gamut.

use rand::Rng;

use crate::color::{Color, Hsl, Lab};
use crate::named;

fn adjust_hsl(color: &Color, f: impl FnOnce(&mut Hsl)) -> Color {
    let mut hsl = color.to_hsl();
    f(&mut hsl);
    hsl.s = hsl.s.clamp(0.0, 1.0);
    hsl.l = hsl.l.clamp(0.0, 1.0);
    hsl.into()
}

pub fn saturate(color: &Color, amount: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.s += amount.clamp(0.0, 1.0))
}

pub fn desaturate(color: &Color, amount: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.s -= amount.clamp(0.0, 1.0))
}

pub fn lighten(color: &Color, amount: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.l += amount.clamp(0.0, 1.0))
}

pub fn darken(color: &Color, amount: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.l -= amount.clamp(0.0, 1.0))
}

/// Fully desaturated copy; lightness is kept.
pub fn grayscale(color: &Color) -> Color {
    desaturate(color, 1.0)
}

/// Rotate the HSL hue by `degrees` (any sign, wraps).
pub fn rotate_hue(color: &Color, degrees: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.h = (hsl.h + degrees / 360.0).rem_euclid(1.0))
}

/// Replace the HSL hue with `degrees`, keeping saturation and lightness.
pub fn with_hue(color: &Color, degrees: f64) -> Color {
    adjust_hsl(color, |hsl| hsl.h = (degrees / 360.0).rem_euclid(1.0))
}

pub fn invert(color: &Color) -> Color {
    Color::new(255 - color.r, 255 - color.g, 255 - color.b)
}

/// Mix `a` toward `b` in Lab. `ratio` 0 returns `a`, 1 returns `b`.
pub fn mix(a: &Color, b: &Color, ratio: f64) -> Color {
    let t = ratio.clamp(0.0, 1.0);
    if t == 0.0 {
        return *a;
    }
    if t == 1.0 {
        return *b;
    }
    let la = a.to_lab();
    let lb = b.to_lab();
    Lab { l: la.l + (lb.l - la.l) * t, a: la.a + (lb.a - la.a) * t, b: la.b + (lb.b - la.b) * t }
        .into()
}

/// A uniformly random opaque color.
pub fn random_color() -> Color {
    random_color_with(&mut rand::rng())
}

pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.random(), rng.random(), rng.random())
}

/// Which notations [`minify`] may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    pub hex: bool,
    pub rgb: bool,
    pub hsl: bool,
    pub name: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self { hex: true, rgb: true, hsl: true, name: false }
    }
}

/// Shortest lower-case CSS notation among the enabled forms.
///
/// Candidates are tried in the order hex, rgb, hsl, name; the first of the
/// shortest wins. With every form disabled the full hex is returned.
pub fn minify(color: &Color, options: &MinifyOptions) -> String {
    let mut candidates = Vec::new();
    if options.hex {
        candidates.push(short_hex(color));
    }
    if options.rgb {
        candidates.push(format!("rgb({},{},{})", color.r, color.g, color.b));
    }
    if options.hsl {
        let hsl = color.to_hsl();
        let rebuilt = Color::from(Hsl {
            h: (hsl.h * 360.0).round() / 360.0,
            s: (hsl.s * 100.0).round() / 100.0,
            l: (hsl.l * 100.0).round() / 100.0,
        });
        // Rounded HSL only qualifies when it still denotes the same color
        if rebuilt == *color {
            candidates.push(format!(
                "hsl({},{}%,{}%)",
                ((hsl.h * 360.0).round() as u16) % 360,
                (hsl.s * 100.0).round(),
                (hsl.l * 100.0).round()
            ));
        }
    }
    if options.name {
        candidates.extend(named::css_name(color));
    }

    candidates
        .into_iter()
        .reduce(|best, c| if c.len() < best.len() { c } else { best })
        .unwrap_or_else(|| color.to_hex().to_lowercase())
}

fn short_hex(color: &Color) -> String {
    let full = color.to_hex().to_lowercase();
    let b = full.as_bytes();
    if b[1] == b[2] && b[3] == b[4] && b[5] == b[6] {
        format!("#{}{}{}", b[1] as char, b[3] as char, b[5] as char)
    } else {
        full
    }
}
