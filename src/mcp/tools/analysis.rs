//! MCP analysis tools: validity, equality, hue, brightness, luminance,
//! contrast, readability, ΔE, random colors and minification.
//!
//! Each answer is a one-key JSON object named after the tool, e.g.
//! `{"is-color-light": true}`.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{color_arg, keyed, ToolResult};
use crate::color::parse_color;
use crate::contrast::{self, round_to, TextSize, WcagLevel};
use crate::difference;
use crate::manipulate::{self, MinifyOptions};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ColorInput {
    #[schemars(description = "The color string")]
    pub color: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ColorPairInput {
    #[schemars(description = "The first color string")]
    pub color1: String,
    #[schemars(description = "The second color string")]
    pub color2: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ReadabilityOptions {
    #[schemars(description = "WCAG level (AA or AAA), default AA")]
    pub level: Option<WcagLevel>,
    #[schemars(description = "Text size (normal or large), default normal")]
    pub size: Option<TextSize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadableInput {
    #[schemars(description = "Foreground color string")]
    pub color1: String,
    #[schemars(description = "Background color string")]
    pub color2: String,
    #[schemars(description = "Readability options")]
    pub options: Option<ReadabilityOptions>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeltaEMethod {
    Cie76,
    #[default]
    Ciede2000,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeltaEInput {
    #[schemars(description = "The first color string")]
    pub color1: String,
    #[schemars(description = "The second color string")]
    pub color2: String,
    #[schemars(description = "Difference formula: cie76 or ciede2000 (default)")]
    pub method: Option<DeltaEMethod>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct MinifyToolOptions {
    #[schemars(description = "Allow #rgb / #rrggbb (default true)")]
    pub hex: Option<bool>,
    #[schemars(description = "Allow rgb() (default true)")]
    pub rgb: Option<bool>,
    #[schemars(description = "Allow hsl() (default true)")]
    pub hsl: Option<bool>,
    #[schemars(description = "Allow CSS color names (default false)")]
    pub name: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MinifyInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[schemars(description = "Which notations may be used")]
    pub options: Option<MinifyToolOptions>,
}

pub fn run_is_valid_color(input: ColorInput) -> ToolResult {
    keyed("is-valid-color", parse_color(&input.color).is_ok())
}

pub fn run_are_colors_equal(input: ColorPairInput) -> ToolResult {
    let a = color_arg(&input.color1)?;
    let b = color_arg(&input.color2)?;
    keyed("are-colors-equal", a == b)
}

/// Hue in whole degrees, [0, 360).
pub fn run_get_color_hue(input: ColorInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    let hue = color.to_hsl().hue_degrees().round() as u16 % 360;
    keyed("get-color-hue", hue)
}

pub fn run_get_color_brightness(input: ColorInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    keyed("get-color-brightness", round_to(contrast::brightness(&color), 2))
}

pub fn run_is_color_light(input: ColorInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    keyed("is-color-light", contrast::is_light(&color))
}

pub fn run_is_color_dark(input: ColorInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    keyed("is-color-dark", contrast::is_dark(&color))
}

pub fn run_get_color_luminance(input: ColorInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    keyed("get-color-luminance", round_to(contrast::relative_luminance(&color), 2))
}

pub fn run_get_color_contrast(input: ColorPairInput) -> ToolResult {
    let a = color_arg(&input.color1)?;
    let b = color_arg(&input.color2)?;
    keyed("get-color-contrast", round_to(contrast::contrast_ratio(&a, &b), 2))
}

pub fn run_is_color_readable(input: ReadableInput) -> ToolResult {
    let fg = color_arg(&input.color1)?;
    let bg = color_arg(&input.color2)?;
    let options = input.options.unwrap_or_default();
    let readable = contrast::is_readable(
        &fg,
        &bg,
        options.level.unwrap_or_default(),
        options.size.unwrap_or_default(),
    );
    keyed("is-color-readable", readable)
}

pub fn run_get_color_delta_e(input: DeltaEInput) -> ToolResult {
    let a = color_arg(&input.color1)?;
    let b = color_arg(&input.color2)?;
    let delta = match input.method.unwrap_or_default() {
        DeltaEMethod::Cie76 => difference::delta_e76(&a, &b),
        DeltaEMethod::Ciede2000 => difference::delta_e2000(&a, &b),
    };
    keyed("get-color-delta-e", round_to(delta, 3))
}

pub fn run_get_random_color() -> ToolResult {
    keyed("color", manipulate::random_color().to_hex())
}

pub fn run_minify_color(input: MinifyInput) -> ToolResult {
    let color = color_arg(&input.color)?;
    let defaults = MinifyOptions::default();
    let options = input.options.unwrap_or_default();
    let options = MinifyOptions {
        hex: options.hex.unwrap_or(defaults.hex),
        rgb: options.rgb.unwrap_or(defaults.rgb),
        hsl: options.hsl.unwrap_or(defaults.hsl),
        name: options.name.unwrap_or(defaults.name),
    };
    keyed("color", manipulate::minify(&color, &options))
}
