//! Classic scheme modes.
//!
//! Each mode is a fixed table of parts. A part claims a share of the output
//! and carries one transform per HSL channel; the channel mode decides which
//! offset in [-0.5, 0.5] the transform receives:
//!
//! - `Global`: always 0
//! - `Uniform`: spread across the colors of the part
//! - `Single`: spread across the parts of the mode
//!
//! Hue results wrap around the wheel; saturation and lightness clamp.

use serde::Serialize;

use crate::color::{Color, ColorError, Hsl};
use crate::descriptor::ColorDescriptor;

const IMAGE_BASE: &str = "https://www.thecolorapi.com/scheme?format=svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelMode {
    Global,
    Uniform,
    Single,
}

/// Pure channel transform: `(value, offset) -> value`, all as unit fractions.
pub type Origin = fn(f64, f64) -> f64;

#[derive(Debug, Clone, Copy)]
pub struct ChannelTransform {
    pub mode: ChannelMode,
    pub origin: Origin,
}

#[derive(Debug, Clone, Copy)]
pub struct SchemePart {
    /// Share of the output, before rounding
    pub ratio: f64,
    pub h: ChannelTransform,
    pub s: ChannelTransform,
    pub l: ChannelTransform,
}

#[derive(Debug)]
pub struct SchemeMode {
    pub name: &'static str,
    pub description: &'static str,
    pub parts: &'static [SchemePart],
}

fn keep(v: f64, _: f64) -> f64 {
    v
}
fn zero(_: f64, _: f64) -> f64 {
    0.0
}
fn spread(v: f64, t: f64) -> f64 {
    v + t
}
fn spread_tenth(v: f64, t: f64) -> f64 {
    v + t * 0.1
}
fn spread_015(v: f64, t: f64) -> f64 {
    v + t * 0.15
}
fn spread_fifth(v: f64, t: f64) -> f64 {
    v + t * 0.2
}
fn spread_quarter(v: f64, t: f64) -> f64 {
    v + t * 0.25
}
fn spread_half(v: f64, t: f64) -> f64 {
    v + t * 0.5
}
fn spread_three_quarters(v: f64, t: f64) -> f64 {
    v + t * 0.75
}
fn turn_quarter(v: f64, _: f64) -> f64 {
    v + 0.25
}
fn turn_third(v: f64, _: f64) -> f64 {
    v + 0.33
}
fn turn_half(v: f64, _: f64) -> f64 {
    v + 0.5
}
fn turn_two_thirds(v: f64, _: f64) -> f64 {
    v + 0.66
}
fn turn_three_quarters(v: f64, _: f64) -> f64 {
    v + 0.75
}

const fn global(origin: Origin) -> ChannelTransform {
    ChannelTransform { mode: ChannelMode::Global, origin }
}
const fn uniform(origin: Origin) -> ChannelTransform {
    ChannelTransform { mode: ChannelMode::Uniform, origin }
}
const fn single(origin: Origin) -> ChannelTransform {
    ChannelTransform { mode: ChannelMode::Single, origin }
}

/// Seed hue and saturation, lightness spread over the whole range.
const MONO: SchemePart =
    SchemePart { ratio: 1.0, h: global(keep), s: single(spread_tenth), l: uniform(spread) };

/// Neutral grays at the lightness of the seed.
const GRAYS: SchemePart =
    SchemePart { ratio: 0.4, h: global(zero), s: global(zero), l: uniform(spread) };

const fn hue_step(ratio: f64, hue: Origin, step: Origin) -> SchemePart {
    SchemePart { ratio, h: global(hue), s: single(step), l: uniform(step) }
}

/// Every classic mode, in listing order.
pub static SCHEME_MODES: &[SchemeMode] = &[
    SchemeMode {
        name: "monochrome",
        description: "Lightness steps of the seed hue",
        parts: &[MONO],
    },
    SchemeMode {
        name: "monochrome-dark",
        description: "Seed-hue steps followed by neutral grays",
        parts: &[SchemePart { ratio: 0.6, ..MONO }, GRAYS],
    },
    SchemeMode {
        name: "monochrome-light",
        description: "Neutral grays followed by seed-hue steps",
        parts: &[GRAYS, SchemePart { ratio: 0.6, ..MONO }],
    },
    SchemeMode {
        name: "analogic",
        description: "Hues fanned out to either side of the seed",
        parts: &[SchemePart {
            ratio: 1.0,
            h: uniform(spread_half),
            s: global(spread_tenth),
            l: uniform(spread_tenth),
        }],
    },
    SchemeMode {
        name: "complement",
        description: "The complement followed by the seed hue",
        parts: &[hue_step(0.4, turn_half, spread_quarter), hue_step(0.6, keep, spread_quarter)],
    },
    SchemeMode {
        name: "analogic-complement",
        description: "The complement followed by an analogic fan",
        parts: &[
            hue_step(0.4, turn_half, spread_half),
            SchemePart {
                ratio: 0.6,
                h: uniform(spread_three_quarters),
                s: single(spread_tenth),
                l: global(spread_tenth),
            },
        ],
    },
    SchemeMode {
        name: "triad",
        description: "Three hues a third of the wheel apart",
        parts: &[
            hue_step(0.33, turn_third, spread_fifth),
            hue_step(0.33, turn_two_thirds, spread_fifth),
            hue_step(0.34, keep, spread_fifth),
        ],
    },
    SchemeMode {
        name: "quad",
        description: "Four hues a quarter of the wheel apart",
        parts: &[
            hue_step(0.25, turn_quarter, spread_015),
            hue_step(0.25, turn_half, spread_015),
            hue_step(0.25, turn_three_quarters, spread_015),
            hue_step(0.25, keep, spread_015),
        ],
    },
];

/// Look up a classic mode by name.
pub fn find_mode(name: &str) -> Result<&'static SchemeMode, ColorError> {
    let key = name.trim().to_ascii_lowercase();
    SCHEME_MODES.iter().find(|m| m.name == key).ok_or_else(|| {
        ColorError::InvalidArgument(format!(
            "Unknown scheme mode '{}'. Expected one of: {}",
            name,
            SCHEME_MODES.iter().map(|m| m.name).collect::<Vec<_>>().join(", ")
        ))
    })
}

/// Split `count` over the parts. Every part but the last takes
/// `round(ratio * count)`, capped by what is left; the last takes the rest.
fn part_sizes(parts: &[SchemePart], count: usize) -> Vec<usize> {
    let mut left = count;
    let mut sizes = Vec::with_capacity(parts.len());
    for (j, part) in parts.iter().enumerate() {
        let size = if j + 1 == parts.len() {
            left
        } else {
            ((part.ratio * count as f64).round() as usize).min(left)
        };
        left -= size;
        sizes.push(size);
    }
    sizes
}

/// Position of `index` in `0..len` mapped onto [-0.5, 0.5]; 0 when `len` is 1.
fn centered(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64 - 0.5
    }
}

fn channel_offset(mode: ChannelMode, uniform_t: f64, single_t: f64) -> f64 {
    match mode {
        ChannelMode::Global => 0.0,
        ChannelMode::Uniform => uniform_t,
        ChannelMode::Single => single_t,
    }
}

impl SchemeMode {
    /// Exactly `count` colors derived from `seed`.
    pub fn generate(&self, seed: &Color, count: usize) -> Vec<Color> {
        let base = seed.to_hsl();
        let sizes = part_sizes(self.parts, count);
        let mut colors = Vec::with_capacity(count);

        for (j, (part, &size)) in self.parts.iter().zip(&sizes).enumerate() {
            let single_t = centered(j, self.parts.len());
            for i in 0..size {
                let uniform_t = centered(i, size);
                let apply = |t: &ChannelTransform, value: f64| {
                    (t.origin)(value, channel_offset(t.mode, uniform_t, single_t))
                };
                let hsl = Hsl {
                    h: apply(&part.h, base.h).rem_euclid(1.0),
                    s: apply(&part.s, base.s).clamp(0.0, 1.0),
                    l: apply(&part.l, base.l).clamp(0.0, 1.0),
                };
                colors.push(Color::from(hsl));
            }
        }
        colors
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemeImage {
    pub bare: String,
    pub named: String,
}

#[derive(Debug, Clone)]
pub struct SchemeLinks {
    pub self_link: String,
    /// One link per classic mode, keyed by mode name
    pub schemes: Vec<(String, String)>,
}

/// A classic scheme with full descriptors for the seed and every color.
#[derive(Debug, Clone, Serialize)]
pub struct ClassicScheme {
    pub mode: String,
    pub count: usize,
    pub colors: Vec<ColorDescriptor>,
    pub seed: ColorDescriptor,
    pub image: SchemeImage,
    #[serde(rename = "_links", serialize_with = "serialize_links")]
    pub links: SchemeLinks,
}

fn serialize_links<S: serde::Serializer>(links: &SchemeLinks, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    struct Schemes<'a>(&'a [(String, String)]);
    impl Serialize for Schemes<'_> {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            let mut map = s.serialize_map(Some(self.0.len()))?;
            for (mode, href) in self.0 {
                map.serialize_entry(mode, href)?;
            }
            map.end()
        }
    }

    let mut map = s.serialize_map(Some(2))?;
    map.serialize_entry("self", &links.self_link)?;
    map.serialize_entry("schemes", &Schemes(&links.schemes))?;
    map.end()
}

/// Run the named classic mode and describe every color.
pub fn classic_scheme(seed: &Color, mode: &str, count: usize) -> Result<ClassicScheme, ColorError> {
    let scheme_mode = find_mode(mode)?;
    let clean = seed.clean_hex();
    let query = |name: &str| format!("hex={}&mode={}&count={}", clean, name, count);

    Ok(ClassicScheme {
        mode: scheme_mode.name.to_string(),
        count,
        colors: scheme_mode.generate(seed, count).iter().map(ColorDescriptor::from_color).collect(),
        seed: ColorDescriptor::from_color(seed),
        image: SchemeImage {
            bare: format!("{}&named=false&{}", IMAGE_BASE, query(scheme_mode.name)),
            named: format!("{}&{}", IMAGE_BASE, query(scheme_mode.name)),
        },
        links: SchemeLinks {
            self_link: format!("/scheme?{}", query(scheme_mode.name)),
            schemes: SCHEME_MODES
                .iter()
                .map(|m| (m.name.to_string(), format!("/scheme?{}", query(m.name))))
                .collect(),
        },
    })
}
