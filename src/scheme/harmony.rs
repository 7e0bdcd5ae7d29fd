//! Hue-offset harmonies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError};
use crate::manipulate::rotate_hue;

/// A fixed set of hue offsets around a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum HarmonyKind {
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    SplitComplementary,
    DoubleSplitComplementary,
    Rectangle,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 7] = [
        HarmonyKind::Analogous,
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Tetradic,
        HarmonyKind::SplitComplementary,
        HarmonyKind::DoubleSplitComplementary,
        HarmonyKind::Rectangle,
    ];

    /// Hue offsets in degrees, in output order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyKind::Analogous => &[-30.0, 0.0, 30.0],
            HarmonyKind::Complementary => &[0.0, 180.0],
            HarmonyKind::Triadic => &[0.0, 120.0, 240.0],
            HarmonyKind::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            HarmonyKind::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyKind::DoubleSplitComplementary => &[-30.0, 0.0, 30.0, 150.0, 210.0],
            HarmonyKind::Rectangle => &[0.0, 60.0, 180.0, 240.0],
        }
    }

    /// Number of colors the harmony produces.
    pub fn size(self) -> usize {
        self.offsets().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Tetradic => "tetradic",
            HarmonyKind::SplitComplementary => "split-complementary",
            HarmonyKind::DoubleSplitComplementary => "double-split-complementary",
            HarmonyKind::Rectangle => "rectangle",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HarmonyKind::Analogous => "Neighbors 30 degrees either side of the base hue",
            HarmonyKind::Complementary => "The base hue and its opposite",
            HarmonyKind::Triadic => "Three hues evenly spaced around the wheel",
            HarmonyKind::Tetradic => "Four hues evenly spaced around the wheel",
            HarmonyKind::SplitComplementary => "The base plus the two neighbors of its complement",
            HarmonyKind::DoubleSplitComplementary => {
                "Analogous neighbors plus the two neighbors of the complement"
            }
            HarmonyKind::Rectangle => "Two complementary pairs 60 degrees apart",
        }
    }

    /// Apply the harmony to `base`. The zero offset yields `base` itself.
    pub fn apply(self, base: &Color) -> Vec<Color> {
        self.offsets()
            .iter()
            .map(|&offset| if offset == 0.0 { *base } else { rotate_hue(base, offset) })
            .collect()
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyKind::ALL.iter().copied().find(|k| k.name() == key).ok_or_else(|| {
            ColorError::InvalidArgument(format!(
                "Unknown harmony '{}'. Expected one of: {}",
                s,
                HarmonyKind::ALL.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let sizes: Vec<usize> = HarmonyKind::ALL.iter().map(|k| k.size()).collect();
        assert_eq!(sizes, vec![3, 2, 3, 4, 3, 5, 4]);
    }

    #[test]
    fn test_complementary_of_red() {
        let colors = HarmonyKind::Complementary.apply(&Color::new(255, 0, 0));
        assert_eq!(colors, vec![Color::new(255, 0, 0), Color::new(0, 255, 255)]);
    }

    #[test]
    fn test_triadic_of_red() {
        let colors = HarmonyKind::Triadic.apply(&Color::new(255, 0, 0));
        assert_eq!(colors, vec![Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)]);
    }

    #[test]
    fn test_analogous_keeps_base_in_middle() {
        let base = Color::new(0, 87, 184);
        let colors = HarmonyKind::Analogous.apply(&base);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], base);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("triadic".parse::<HarmonyKind>().unwrap(), HarmonyKind::Triadic);
        assert_eq!(
            "Double_Split_Complementary".parse::<HarmonyKind>().unwrap(),
            HarmonyKind::DoubleSplitComplementary
        );
        let err = "pentadic".parse::<HarmonyKind>().unwrap_err();
        assert!(err.to_string().contains("split-complementary"));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&HarmonyKind::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
    }
}
