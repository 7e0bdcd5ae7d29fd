//! Color vision deficiency simulation and palette adjustment.
//!
//! Dichromacies use the full-severity matrices of Machado, Oliveira and
//! Fernandes (2009) applied in linear RGB. Achromatopsia maps every color to
//! its linear luminance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::convert::{linear_to_srgb, srgb_to_linear};
use crate::color::{Color, ColorError};
use crate::difference::delta_e76;
use crate::manipulate::rotate_hue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum VisionDeficiency {
    Protanopia,
    #[default]
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.152286, 1.052583, -0.204868],
    [0.114503, 0.786281, 0.099216],
    [-0.003882, -0.048116, 1.051998],
];

const DEUTERANOPIA: Matrix = [
    [0.367322, 0.860646, -0.227968],
    [0.280085, 0.672501, 0.047413],
    [-0.011820, 0.042940, 0.968881],
];

const TRITANOPIA: Matrix = [
    [1.255528, -0.076749, -0.178779],
    [-0.078411, 0.930809, 0.147602],
    [0.004733, 0.691367, 0.303900],
];

impl VisionDeficiency {
    pub const ALL: [VisionDeficiency; 4] = [
        VisionDeficiency::Protanopia,
        VisionDeficiency::Deuteranopia,
        VisionDeficiency::Tritanopia,
        VisionDeficiency::Achromatopsia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisionDeficiency::Protanopia => "protanopia",
            VisionDeficiency::Deuteranopia => "deuteranopia",
            VisionDeficiency::Tritanopia => "tritanopia",
            VisionDeficiency::Achromatopsia => "achromatopsia",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VisionDeficiency::Protanopia => "No functioning long-wavelength (red) cones",
            VisionDeficiency::Deuteranopia => "No functioning medium-wavelength (green) cones",
            VisionDeficiency::Tritanopia => "No functioning short-wavelength (blue) cones",
            VisionDeficiency::Achromatopsia => "No color perception, luminance only",
        }
    }

    fn matrix(self) -> Option<&'static Matrix> {
        match self {
            VisionDeficiency::Protanopia => Some(&PROTANOPIA),
            VisionDeficiency::Deuteranopia => Some(&DEUTERANOPIA),
            VisionDeficiency::Tritanopia => Some(&TRITANOPIA),
            VisionDeficiency::Achromatopsia => None,
        }
    }

    /// How `color` appears under this deficiency.
    pub fn simulate(self, color: &Color) -> Color {
        let rgb = color.to_rgb();
        let linear = [srgb_to_linear(rgb.r), srgb_to_linear(rgb.g), srgb_to_linear(rgb.b)];

        let out = match self.matrix() {
            Some(m) => {
                let row = |r: &[f64; 3]| r[0] * linear[0] + r[1] * linear[1] + r[2] * linear[2];
                [row(&m[0]), row(&m[1]), row(&m[2])]
            }
            None => {
                let y = 0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2];
                [y, y, y]
            }
        };

        Color::from_fractions(
            linear_to_srgb(out[0].clamp(0.0, 1.0)),
            linear_to_srgb(out[1].clamp(0.0, 1.0)),
            linear_to_srgb(out[2].clamp(0.0, 1.0)),
        )
    }
}

impl fmt::Display for VisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisionDeficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        VisionDeficiency::ALL.iter().copied().find(|v| v.label() == key).ok_or_else(|| {
            ColorError::InvalidArgument(format!(
                "Unknown vision deficiency '{}'. Expected protanopia, deuteranopia, tritanopia or achromatopsia",
                s
            ))
        })
    }
}

/// Tuning for [`ensure_color_blind_safe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBlindOptions {
    /// Smallest acceptable ΔE76 between any two simulated colors
    pub min_delta: f64,
    /// Hue nudges tried per color
    pub max_attempts: u32,
}

impl Default for ColorBlindOptions {
    fn default() -> Self {
        Self { min_delta: 10.0, max_attempts: 15 }
    }
}

/// Outcome of a color-blind safety pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBlindCheck {
    pub safe: bool,
    pub palette: Vec<Color>,
    /// Smallest simulated ΔE76 between any two colors of the final palette
    #[serde(rename = "minDistance")]
    pub min_distance: f64,
}

/// Smallest ΔE76 between any two colors as seen under `vision`.
pub fn min_simulated_distance(palette: &[Color], vision: VisionDeficiency) -> f64 {
    let simulated: Vec<Color> = palette.iter().map(|c| vision.simulate(c)).collect();
    let mut min = f64::INFINITY;
    for i in 0..simulated.len() {
        for j in i + 1..simulated.len() {
            min = min.min(delta_e76(&simulated[i], &simulated[j]));
        }
    }
    min
}

/// Nudge hues until every pair stays at least `min_delta` apart under
/// `vision`.
///
/// Colors are visited in order. For each one, attempt `n` rotates its hue by
/// `n` degrees on even attempts and `-n` on odd ones, stopping as soon as
/// the whole palette is distinguishable.
pub fn ensure_color_blind_safe(
    palette: &[Color],
    vision: VisionDeficiency,
    options: ColorBlindOptions,
) -> Result<ColorBlindCheck, ColorError> {
    if palette.len() < 2 {
        return Err(ColorError::InvalidArgument(format!(
            "A palette needs at least 2 colors, got {}",
            palette.len()
        )));
    }

    let is_safe = |colors: &[Color]| min_simulated_distance(colors, vision) >= options.min_delta;

    let mut adjusted = palette.to_vec();
    for i in 0..adjusted.len() {
        let original = palette[i];
        for attempt in 0..options.max_attempts {
            if is_safe(&adjusted) {
                break;
            }
            let degrees = if attempt % 2 == 0 { attempt as f64 } else { -(attempt as f64) };
            adjusted[i] = rotate_hue(&original, degrees);
        }
    }

    let min_distance = min_simulated_distance(&adjusted, vision);
    Ok(ColorBlindCheck { safe: min_distance >= options.min_delta, palette: adjusted, min_distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_grays_are_unchanged() {
        for vision in VisionDeficiency::ALL {
            for gray in [Color::BLACK, Color::WHITE, hex("#777777")] {
                let sim = vision.simulate(&gray);
                assert!((sim.r as i16 - gray.r as i16).abs() <= 1, "{} {:?}", vision, sim);
                assert!((sim.b as i16 - gray.b as i16).abs() <= 1, "{} {:?}", vision, sim);
            }
        }
    }

    #[test]
    fn test_deuteranopia_merges_red_and_green() {
        let red = hex("#FF0000");
        let green = hex("#00FF00");
        let normal = delta_e76(&red, &green);
        let simulated = delta_e76(
            &VisionDeficiency::Deuteranopia.simulate(&red),
            &VisionDeficiency::Deuteranopia.simulate(&green),
        );
        assert!(simulated < normal);
    }

    #[test]
    fn test_achromatopsia_is_gray() {
        let sim = VisionDeficiency::Achromatopsia.simulate(&hex("#0057B8"));
        assert_eq!(sim.r, sim.g);
        assert_eq!(sim.g, sim.b);
    }

    #[test]
    fn test_distinct_palette_is_untouched() {
        let palette = vec![Color::BLACK, Color::WHITE, hex("#777777")];
        let check =
            ensure_color_blind_safe(&palette, VisionDeficiency::Deuteranopia, Default::default())
                .unwrap();
        assert!(check.safe);
        assert_eq!(check.palette, palette);
    }

    #[test]
    fn test_too_short_palette() {
        let err = ensure_color_blind_safe(&[Color::BLACK], VisionDeficiency::Protanopia, Default::default())
            .unwrap_err();
        assert!(matches!(err, ColorError::InvalidArgument(_)));
    }

    #[test]
    fn test_identical_colors_cannot_be_made_safe_without_attempts() {
        let palette = vec![hex("#0057B8"), hex("#0057B8")];
        let options = ColorBlindOptions { min_delta: 10.0, max_attempts: 0 };
        let check = ensure_color_blind_safe(&palette, VisionDeficiency::Tritanopia, options).unwrap();
        assert!(!check.safe);
        assert_eq!(check.min_distance, 0.0);
    }

    #[test]
    fn test_safe_flag_matches_distance() {
        let palette = vec![hex("#FF0000"), hex("#00FF00"), hex("#0000FF")];
        let check =
            ensure_color_blind_safe(&palette, VisionDeficiency::Protanopia, Default::default()).unwrap();
        assert_eq!(check.palette.len(), 3);
        assert_eq!(check.safe, check.min_distance >= 10.0);
    }

    #[test]
    fn test_parse_vision() {
        assert_eq!("Tritanopia".parse::<VisionDeficiency>().unwrap(), VisionDeficiency::Tritanopia);
        assert!("blue-blind".parse::<VisionDeficiency>().is_err());
    }
}
