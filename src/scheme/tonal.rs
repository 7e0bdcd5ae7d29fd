//! Tonal ramps and role palettes.
//!
//! A ramp holds the hue and chroma of a base color fixed and walks CIELAB
//! lightness through [`TONES`]. Chroma that would leave the sRGB gamut at a
//! given tone is reduced by binary search, so lightness and hue stay exact.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{convert, Color, Lch};
use crate::contrast::{self, round_to};
use crate::scheme::HarmonyKind;

/// Lightness steps of a ramp, lightest first.
pub const TONES: [u8; 11] = [95, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5];

/// Palette role names, assigned to harmony hues in order.
pub const ROLES: [&str; 5] = ["primary", "secondary", "tertiary", "quaternary", "quinary"];

/// Chroma precision at which the gamut search stops.
const CHROMA_EPSILON: f64 = 0.01;

/// One step of a tonal ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: Color,
    /// Tone number as text, e.g. `"60"`
    pub role: String,
    /// Black or white, whichever contrasts more with `hex`
    #[serde(rename = "onColor")]
    pub on_color: Color,
    /// Contrast of `on_color` against `hex`, two decimals
    pub contrast: f64,
}

impl Swatch {
    pub fn new(color: Color, role: impl Into<String>) -> Self {
        let on_color = contrast::best_foreground(&color);
        Self {
            hex: color,
            role: role.into(),
            on_color,
            contrast: round_to(contrast::contrast_ratio(&color, &on_color), 2),
        }
    }
}

/// The color at lightness `tone` with the hue of `lch` and as much of its
/// chroma as sRGB can hold.
pub fn tone_color(lch: Lch, tone: f64) -> Color {
    let fits = |c: f64| {
        let lab = convert::lch_to_lab(Lch { l: tone, c, h: lch.h });
        convert::in_gamut(convert::lab_to_rgb(lab))
    };

    if fits(lch.c) {
        return Lch { l: tone, ..lch }.into();
    }

    let mut min = 0.0;
    let mut max = lch.c;
    while max - min > CHROMA_EPSILON {
        let chroma = (min + max) / 2.0;
        if fits(chroma) {
            min = chroma;
        } else {
            max = chroma;
        }
    }
    Lch { l: tone, c: min, h: lch.h }.into()
}

/// Eleven swatches from tone 95 down to tone 5.
pub fn tonal_ramp(base: &Color) -> Vec<Swatch> {
    let lch = base.to_lch();
    TONES.iter().map(|&tone| Swatch::new(tone_color(lch, tone as f64), tone.to_string())).collect()
}

/// Named tonal ramps in insertion order.
///
/// Serializes as a JSON object whose key order follows insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    roles: Vec<(String, Vec<Swatch>)>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a role. Replacing keeps the original position.
    pub fn insert(&mut self, role: impl Into<String>, swatches: Vec<Swatch>) {
        let role = role.into();
        match self.roles.iter_mut().find(|(name, _)| *name == role) {
            Some(entry) => entry.1 = swatches,
            None => self.roles.push((role, swatches)),
        }
    }

    pub fn get(&self, role: &str) -> Option<&[Swatch]> {
        self.roles.iter().find(|(name, _)| name == role).map(|(_, s)| s.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Swatch])> {
        self.roles.iter().map(|(name, s)| (name.as_str(), s.as_slice()))
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roles.len()))?;
        for (role, swatches) in &self.roles {
            map.serialize_entry(role, swatches)?;
        }
        map.end()
    }
}

struct PaletteVisitor;

impl<'de> Visitor<'de> for PaletteVisitor {
    type Value = Palette;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from role name to a list of swatches")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Palette, A::Error> {
        let mut palette = Palette::new();
        while let Some((role, swatches)) = access.next_entry::<String, Vec<Swatch>>()? {
            palette.insert(role, swatches);
        }
        Ok(palette)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Palette, D::Error> {
        deserializer.deserialize_map(PaletteVisitor)
    }
}

/// One tonal ramp per harmony hue of `seed`, under the role names in [`ROLES`].
pub fn generate_palette(seed: &Color, kind: HarmonyKind) -> Palette {
    let mut palette = Palette::new();
    for (role, hue) in ROLES.iter().zip(kind.apply(seed)) {
        palette.insert(*role, tonal_ramp(&hue));
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Color {
        Color::from_hex("#0057B8").unwrap()
    }

    #[test]
    fn test_ramp_shape() {
        let ramp = tonal_ramp(&blue());
        assert_eq!(ramp.len(), 11);
        let roles: Vec<&str> = ramp.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["95", "90", "80", "70", "60", "50", "40", "30", "20", "10", "5"]);
    }

    #[test]
    fn test_ramp_lightness_is_monotone() {
        for hex in ["#0057B8", "#FF0000", "#FFFF00", "#00FF00", "#808080"] {
            let ramp = tonal_ramp(&Color::from_hex(hex).unwrap());
            let lightness: Vec<f64> = ramp.iter().map(|s| s.hex.to_lab().l).collect();
            assert!(lightness.windows(2).all(|w| w[0] > w[1]), "{}: {:?}", hex, lightness);
        }
    }

    #[test]
    fn test_on_color_switches_once() {
        let ramp = tonal_ramp(&blue());
        let switches = ramp.windows(2).filter(|w| w[0].on_color != w[1].on_color).count();
        assert!(switches <= 1);
        assert_eq!(ramp[0].on_color, Color::BLACK);
        assert_eq!(ramp[10].on_color, Color::WHITE);
    }

    #[test]
    fn test_on_color_has_the_higher_contrast() {
        for hex in ["#0057B8", "#FF0000", "#19A810", "#FFBF00", "#7B2CBF"] {
            for swatch in tonal_ramp(&Color::from_hex(hex).unwrap()) {
                let other =
                    if swatch.on_color == Color::BLACK { Color::WHITE } else { Color::BLACK };
                assert!(
                    contrast::contrast_ratio(&swatch.hex, &swatch.on_color)
                        >= contrast::contrast_ratio(&swatch.hex, &other),
                    "{} on {}",
                    swatch.on_color,
                    swatch.hex
                );
            }
        }
    }

    #[test]
    fn test_saturated_mid_tones_take_black_text() {
        // YIQ brightness calls both of these dark, but black text contrasts more
        for hex in ["#19A810", "#EF0000"] {
            let swatch = Swatch::new(Color::from_hex(hex).unwrap(), "50");
            assert_eq!(swatch.on_color, Color::BLACK, "{}", hex);
            assert!(swatch.contrast >= 4.5, "{}: {}", hex, swatch.contrast);
        }
    }

    #[test]
    fn test_swatch_contrast_is_rounded() {
        for swatch in tonal_ramp(&blue()) {
            assert_eq!(swatch.contrast, round_to(swatch.contrast, 2));
            assert!(swatch.contrast >= 1.0);
        }
    }

    #[test]
    fn test_tone_color_keeps_lightness_for_saturated_input() {
        let lch = Color::from_hex("#FF0000").unwrap().to_lch();
        let light = tone_color(lch, 95.0);
        assert!((light.to_lab().l - 95.0).abs() < 1.0);
    }

    #[test]
    fn test_palette_roles() {
        let palette = generate_palette(&blue(), HarmonyKind::Tetradic);
        assert_eq!(palette.role_names(), vec!["primary", "secondary", "tertiary", "quaternary"]);
        let palette = generate_palette(&blue(), HarmonyKind::DoubleSplitComplementary);
        assert_eq!(palette.len(), 5);
        assert!(palette.get("quinary").is_some());
    }

    #[test]
    fn test_palette_json_keeps_order() {
        let palette = generate_palette(&blue(), HarmonyKind::Triadic);
        let json = serde_json::to_string(&palette).unwrap();
        let primary = json.find("\"primary\"").unwrap();
        let secondary = json.find("\"secondary\"").unwrap();
        let tertiary = json.find("\"tertiary\"").unwrap();
        assert!(primary < secondary && secondary < tertiary);

        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_swatch_json_field_names() {
        let value = serde_json::to_value(Swatch::new(Color::WHITE, "95")).unwrap();
        assert_eq!(value["hex"], "#FFFFFF");
        assert_eq!(value["onColor"], "#000000");
        assert_eq!(value["contrast"], 21.0);
    }
}
