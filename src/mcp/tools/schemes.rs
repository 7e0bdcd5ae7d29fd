//! MCP scheme tools: seeded random schemes, classic modes, role palettes,
//! harmonies, tint/shade/tone ramps and the color-blind safety pass.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{color_arg, hexes, keyed, to_pretty_json, ToolResult};
use crate::color::Color;
use crate::config::ChromaConfig;
use crate::scheme::{
    classic_scheme, ensure_color_blind_safe, generate_palette, random_scheme_descriptors, shades,
    tints, tones, ColorBlindOptions, HarmonyKind, VisionDeficiency,
};

/// Largest count any scheme tool will generate.
pub const MAX_COUNT: usize = 100;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SchemeInfoInput {
    #[schemars(description = "Seed color string (hex, rgb, hsl, hsv, cmyk or a name)")]
    pub color: String,
    #[schemars(description = "Harmony to reserve at the start of the scheme")]
    pub mode: Option<HarmonyKind>,
    #[schemars(description = "Number of colors in the scheme (default from config, 6)")]
    pub count: Option<usize>,
    #[schemars(
        description = "A seed for the scheme generation. The same seed and color produce the same scheme"
    )]
    pub seed: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClassicSchemeInput {
    #[schemars(description = "Seed color string")]
    pub color: String,
    #[schemars(
        description = "monochrome, monochrome-dark, monochrome-light, analogic, complement, analogic-complement, triad or quad (default monochrome)"
    )]
    pub mode: Option<String>,
    #[schemars(description = "Number of colors in the scheme (default 5)")]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PaletteInput {
    #[schemars(description = "Seed color string")]
    pub seed: String,
    #[schemars(description = "Color-harmony template to use (default from config, analogous)")]
    pub mode: Option<HarmonyKind>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HarmonyInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[serde(rename = "type")]
    #[schemars(description = "The type of harmony to generate")]
    pub kind: HarmonyKind,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RampInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[schemars(description = "Number of colors to generate, at least 1 (default from config, 5)")]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ColorBlindInput {
    #[schemars(description = "Two or more color strings")]
    pub palette: Vec<String>,
    #[serde(rename = "type")]
    #[schemars(description = "Vision deficiency to simulate (default from config, deuteranopia)")]
    pub vision: Option<VisionDeficiency>,
    #[serde(rename = "minDelta")]
    #[schemars(description = "Smallest acceptable ΔE76 between simulated colors (default 10)")]
    pub min_delta: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SchemeInfoOutput<T: Serialize> {
    seed: String,
    scheme: T,
}

fn count_arg(value: Option<usize>, default: usize) -> Result<usize, String> {
    let count = value.unwrap_or(default);
    if (1..=MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!("'count' must be between 1 and {}, got {}", MAX_COUNT, count))
    }
}

/// A fresh seed string for requests that do not supply one.
fn fresh_seed() -> String {
    format!("{:016x}", rand::random::<u64>())
}

pub fn run_scheme_info(input: SchemeInfoInput, config: &ChromaConfig) -> ToolResult {
    let base = color_arg(&input.color)?;
    let count = count_arg(input.count, config.defaults.scheme_count)?;
    let seed = input.seed.unwrap_or_else(fresh_seed);
    let scheme = random_scheme_descriptors(&base, count, &seed, input.mode);
    to_pretty_json(&SchemeInfoOutput { seed, scheme })
}

pub fn run_classic_scheme(input: ClassicSchemeInput) -> ToolResult {
    let seed = color_arg(&input.color)?;
    let count = count_arg(input.count, 5)?;
    let mode = input.mode.as_deref().unwrap_or("monochrome");
    let scheme = classic_scheme(&seed, mode, count).map_err(|e| e.to_string())?;
    to_pretty_json(&scheme)
}

pub fn run_generate_palette(input: PaletteInput, config: &ChromaConfig) -> ToolResult {
    let seed = color_arg(&input.seed)?;
    let mode = input.mode.unwrap_or(config.defaults.palette_mode);
    to_pretty_json(&generate_palette(&seed, mode))
}

pub fn run_harmonies(input: HarmonyInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    keyed("harmonies", hexes(&input.kind.apply(&color)))
}

fn run_ramp(
    input: RampInput,
    config: &ChromaConfig,
    key: &str,
    ramp: fn(&Color, usize) -> Vec<Color>,
) -> ToolResult {
    let color = color_arg(&input.color)?;
    let count = count_arg(input.count, config.defaults.ramp_count)?;
    keyed(key, hexes(&ramp(&color, count)))
}

pub fn run_tints(input: RampInput, config: &ChromaConfig) -> ToolResult {
    run_ramp(input, config, "tints", tints)
}

pub fn run_shades(input: RampInput, config: &ChromaConfig) -> ToolResult {
    run_ramp(input, config, "shades", shades)
}

pub fn run_tones(input: RampInput, config: &ChromaConfig) -> ToolResult {
    run_ramp(input, config, "tones", tones)
}

pub fn run_color_blind_safe(input: ColorBlindInput, config: &ChromaConfig) -> ToolResult {
    let palette = input.palette.iter().map(|c| color_arg(c)).collect::<Result<Vec<_>, _>>()?;
    let min_delta = input.min_delta.unwrap_or(config.color_blind.min_delta);
    if !(min_delta.is_finite() && min_delta >= 0.0) {
        return Err(format!("'minDelta' must be a non-negative number, got {}", min_delta));
    }
    let options = ColorBlindOptions { min_delta, max_attempts: config.color_blind.max_attempts };
    let vision = input.vision.unwrap_or(config.color_blind.vision);
    let check = ensure_color_blind_safe(&palette, vision, options).map_err(|e| e.to_string())?;
    to_pretty_json(&check)
}
