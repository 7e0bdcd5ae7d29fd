//! Nearest named-color search
//!
//! The table is parsed once, on first use, and never mutated afterwards.
//! Distance between two colors is the equal-weight blend of the squared RGB
//! distance (0-255 channels) and the squared HSL distance (hue in degrees,
//! taken the short way round the circle; saturation and lightness in
//! percent).

mod table;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::color::{Color, ColorError};
use table::{CSS_NAMED_COLORS, EXTRA_NAMED_COLORS};

/// One entry of the reference table, with its derived coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct NamedColorEntry {
    pub name: &'static str,
    pub hex: String,
    #[serde(skip)]
    pub color: Color,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
    /// Whether `name` is a CSS named color
    pub css: bool,
}

impl NamedColorEntry {
    fn new(name: &'static str, color: Color, css: bool) -> Self {
        let (h, s, l) = hsl_coordinates(&color);
        Self { name, hex: color.to_hex(), color, r: color.r, g: color.g, b: color.b, h, s, l, css }
    }
}

/// Result of a nearest-name lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedMatch {
    /// Name of the closest entry
    pub name: String,
    /// Canonical hex of the closest entry
    pub closest_hex: String,
    /// Whether the query hex equals the entry hex
    pub exact: bool,
    /// Weighted squared distance; 0 for exact matches
    pub distance: f64,
}

lazy_static! {
    static ref NAMED_COLORS: Vec<NamedColorEntry> = CSS_NAMED_COLORS
        .iter()
        .map(|entry| (entry, true))
        .chain(EXTRA_NAMED_COLORS.iter().map(|entry| (entry, false)))
        .filter_map(|((name, hex), css)| {
            Color::from_hex(hex).ok().map(|c| NamedColorEntry::new(name, c, css))
        })
        .collect();
}

/// All named colors in table order.
pub fn named_colors() -> &'static [NamedColorEntry] {
    &NAMED_COLORS
}

/// Look up an entry by name, ignoring case, spaces, hyphens and underscores.
///
/// `"dark slate gray"`, `"DarkSlateGray"` and `"dark-slate-gray"` all match.
pub fn find_by_name(name: &str) -> Option<&'static NamedColorEntry> {
    let key = fold_name(name);
    if key.is_empty() {
        return None;
    }
    NAMED_COLORS.iter().find(|e| fold_name(e.name) == key)
}

/// The CSS keyword for exactly this color, lower-case without spaces.
///
/// Names from outside the CSS set are never returned.
pub fn css_name(color: &Color) -> Option<String> {
    NAMED_COLORS
        .iter()
        .find(|e| e.css && e.color == *color)
        .map(|e| e.name.replace(' ', "").to_lowercase())
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the closest named color.
///
/// An entry whose hex equals the query short-circuits with distance 0. When
/// several entries tie, the first in table order wins.
pub fn nearest(color: &Color) -> NamedMatch {
    if let Some(entry) = NAMED_COLORS.iter().find(|e| e.color == *color) {
        return NamedMatch {
            name: entry.name.to_string(),
            closest_hex: entry.hex.clone(),
            exact: true,
            distance: 0.0,
        };
    }

    let (h, s, l) = hsl_coordinates(color);
    let mut best: Option<(&NamedColorEntry, f64)> = None;
    for entry in NAMED_COLORS.iter() {
        let dr = color.r as f64 - entry.r as f64;
        let dg = color.g as f64 - entry.g as f64;
        let db = color.b as f64 - entry.b as f64;
        let rgb = dr * dr + dg * dg + db * db;

        let raw_dh = (h - entry.h).abs();
        let dh = raw_dh.min(360.0 - raw_dh);
        let ds = s - entry.s;
        let dl = l - entry.l;
        let hsl = dh * dh + ds * ds + dl * dl;

        let distance = 0.5 * rgb + 0.5 * hsl;
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entry, distance));
        }
    }

    match best {
        Some((entry, distance)) => NamedMatch {
            name: entry.name.to_string(),
            closest_hex: entry.hex.clone(),
            exact: false,
            distance,
        },
        None => NamedMatch {
            name: String::new(),
            closest_hex: color.to_hex(),
            exact: false,
            distance: f64::INFINITY,
        },
    }
}

/// [`nearest`] for a hex string; rejects malformed hex.
pub fn nearest_hex(hex: &str) -> Result<NamedMatch, ColorError> {
    Color::from_hex(hex).map(|c| nearest(&c))
}

fn hsl_coordinates(color: &Color) -> (f64, f64, f64) {
    let hsl = color.to_hsl();
    (hsl.hue_degrees(), hsl.s * 100.0, hsl.l * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_loaded() {
        assert!(named_colors().len() > 140);
        assert!(named_colors().iter().all(|e| e.hex.starts_with('#') && e.hex.len() == 7));
    }

    #[test]
    fn test_exact_match_red() {
        let m = nearest_hex("FF0000").unwrap();
        assert_eq!(m, NamedMatch {
            name: "Red".into(),
            closest_hex: "#FF0000".into(),
            exact: true,
            distance: 0.0
        });
    }

    #[test]
    fn test_every_entry_matches_itself() {
        for entry in named_colors() {
            let m = nearest(&entry.color);
            assert!(m.exact, "{} should match exactly", entry.name);
            assert_eq!(m.closest_hex, entry.hex);
            assert_eq!(m.distance, 0.0);
        }
    }

    #[test]
    fn test_css_flag_agrees_with_css_parser() {
        use lightningcss::traits::Parse;
        use lightningcss::values::color::CssColor;

        for entry in named_colors() {
            let keyword = entry.name.replace(' ', "").to_lowercase();
            assert_eq!(CssColor::parse_string(&keyword).is_ok(), entry.css, "{}", entry.name);
        }
    }

    #[test]
    fn test_css_name_skips_extra_names() {
        assert_eq!(css_name(&Color::from_hex("#FF0000").unwrap()).as_deref(), Some("red"));
        let slate = Color::from_hex("#2F4F4F").unwrap();
        assert_eq!(css_name(&slate).as_deref(), Some("darkslategray"));
        for hex in ["#FFBF00", "#00A86B", "#FF2400"] {
            assert_eq!(css_name(&Color::from_hex(hex).unwrap()), None, "{}", hex);
            assert!(nearest_hex(hex).unwrap().exact);
        }
    }

    #[test]
    fn test_duplicate_hex_first_wins() {
        assert_eq!(nearest_hex("#00FFFF").unwrap().name, "Aqua");
        assert_eq!(nearest_hex("#FF00FF").unwrap().name, "Fuchsia");
    }

    #[test]
    fn test_near_miss() {
        let m = nearest_hex("#FE0101").unwrap();
        assert_eq!(m.name, "Red");
        assert!(!m.exact);
        assert!(m.distance > 0.0);
    }

    #[test]
    fn test_hue_distance_wraps() {
        // Hue 358 is closer to red (0) than to anything at 300+
        let m = nearest(&Color::new(250, 2, 10));
        assert_eq!(m.name, "Red");
    }

    #[test]
    fn test_find_by_name_folds_case_and_spacing() {
        let expected = Color::new(47, 79, 79);
        assert_eq!(find_by_name("Dark Slate Gray").unwrap().color, expected);
        assert_eq!(find_by_name("darkslategray").unwrap().color, expected);
        assert_eq!(find_by_name("dark-slate_gray").unwrap().color, expected);
        assert!(find_by_name("").is_none());
        assert!(find_by_name("not a color").is_none());
    }

    #[test]
    fn test_nearest_hex_rejects_garbage() {
        assert!(nearest_hex("GGG").is_err());
    }
}
