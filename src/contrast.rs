//! WCAG luminance, contrast and readability checks.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Luminance cutoff below which a channel is treated as linear.
const LINEAR_CUTOFF: f64 = 0.03928;

/// Conformance level for readability checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum WcagLevel {
    #[default]
    AA,
    AAA,
}

/// Text size class for readability checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
pub fn relative_luminance(color: &Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, in [1, 21]. Order does not matter.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever contrasts more with `background`. Ties go to black.
pub fn best_foreground(background: &Color) -> Color {
    let black = contrast_ratio(&Color::BLACK, background);
    let white = contrast_ratio(&Color::WHITE, background);
    if white > black {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Perceived brightness, `(299r + 587g + 114b) / 1000`, scaled to [0, 1].
pub fn brightness(color: &Color) -> f64 {
    (299.0 * color.r as f64 + 587.0 * color.g as f64 + 114.0 * color.b as f64) / 1000.0 / 255.0
}

pub fn is_light(color: &Color) -> bool {
    brightness(color) >= 0.5
}

pub fn is_dark(color: &Color) -> bool {
    !is_light(color)
}

/// Minimum contrast ratio for a level and text size.
pub fn min_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::AA, TextSize::Normal) => 4.5,
        (WcagLevel::AA, TextSize::Large) => 3.0,
        (WcagLevel::AAA, TextSize::Normal) => 7.0,
        (WcagLevel::AAA, TextSize::Large) => 4.5,
    }
}

pub fn is_readable(foreground: &Color, background: &Color, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(foreground, background) >= min_ratio(level, size)
}

/// Round to a fixed number of decimals for display.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
