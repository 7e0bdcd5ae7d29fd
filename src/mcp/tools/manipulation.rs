//! MCP manipulation tools. Every tool answers `{"color": "#RRGGBB"}`.

use schemars::JsonSchema;
use serde::Deserialize;

use super::analysis::ColorInput;
use super::{color_arg, keyed, unit_arg, ToolResult};
use crate::color::Color;
use crate::manipulate;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AmountInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[schemars(description = "Amount between 0 and 1")]
    pub amount: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HueValueInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[schemars(description = "New hue in degrees")]
    pub value: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HueRotateInput {
    #[schemars(description = "The color string")]
    pub color: String,
    #[schemars(description = "Degrees to rotate the hue by, may be negative")]
    pub amount: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MixInput {
    #[schemars(description = "The first color string")]
    pub color1: String,
    #[schemars(description = "The second color string")]
    pub color2: String,
    #[schemars(description = "Share of the second color, 0 to 1 (default 0.5)")]
    pub ratio: Option<f64>,
}

fn answer(color: Color) -> ToolResult {
    keyed("color", color.to_hex())
}

fn with_amount(input: AmountInput, op: fn(&Color, f64) -> Color) -> ToolResult {
    let color = color_arg(&input.color)?;
    let amount = unit_arg("amount", input.amount)?;
    answer(op(&color, amount))
}

pub fn run_invert_color(input: ColorInput) -> ToolResult {
    answer(manipulate::invert(&color_arg(&input.color)?))
}

pub fn run_grayscale_color(input: ColorInput) -> ToolResult {
    answer(manipulate::grayscale(&color_arg(&input.color)?))
}

pub fn run_saturate_color(input: AmountInput) -> ToolResult {
    with_amount(input, manipulate::saturate)
}

pub fn run_desaturate_color(input: AmountInput) -> ToolResult {
    with_amount(input, manipulate::desaturate)
}

pub fn run_lighten_color(input: AmountInput) -> ToolResult {
    with_amount(input, manipulate::lighten)
}

pub fn run_darken_color(input: AmountInput) -> ToolResult {
    with_amount(input, manipulate::darken)
}

pub fn run_set_color_hue(input: HueValueInput) -> ToolResult {
    if !input.value.is_finite() {
        return Err(format!("'value' must be a finite number of degrees, got {}", input.value));
    }
    answer(manipulate::with_hue(&color_arg(&input.color)?, input.value))
}

pub fn run_rotate_color_hue(input: HueRotateInput) -> ToolResult {
    if !input.amount.is_finite() {
        return Err(format!("'amount' must be a finite number of degrees, got {}", input.amount));
    }
    answer(manipulate::rotate_hue(&color_arg(&input.color)?, input.amount))
}

pub fn run_mix_colors(input: MixInput) -> ToolResult {
    let a = color_arg(&input.color1)?;
    let b = color_arg(&input.color2)?;
    let ratio = unit_arg("ratio", input.ratio.unwrap_or(0.5))?;
    answer(manipulate::mix(&a, &b, ratio))
}
