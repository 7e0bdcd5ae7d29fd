//! MCP get-color-info tool: the full descriptor for one color.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{to_pretty_json, ToolResult};
use crate::color::{CmykSpec, Color, ColorSpec, HslSpec, HsvSpec, RgbSpec};
use crate::config::InvalidColorPolicy;
use crate::descriptor::ColorDescriptor;

/// Input parameters for the get-color-info tool.
///
/// Exactly one representation is used, in the order rgb, hex, hsl, hsv,
/// cmyk, color.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ColorInfoInput {
    #[schemars(
        description = "Color string, e.g. '#0057B8', 'rgb(255, 0, 0)', 'hsl(210, 100%, 36%)', 'cmyk(0, 100, 100, 0)' or a name"
    )]
    pub color: Option<String>,

    #[schemars(description = "Hex color with or without '#', 3 or 6 digits")]
    pub hex: Option<String>,

    #[schemars(description = "RGB components, 0-255 (or 0-1 with is_fraction)")]
    pub rgb: Option<RgbSpec>,

    #[schemars(description = "HSL components: h 0-360, s and l 0-100 (or 0-1 with is_fraction)")]
    pub hsl: Option<HslSpec>,

    #[schemars(description = "HSV components: h 0-360, s and v 0-100 (or 0-1 with is_fraction)")]
    pub hsv: Option<HsvSpec>,

    #[schemars(description = "CMYK components, 0-100 (or 0-1 with is_fraction)")]
    pub cmyk: Option<CmykSpec>,
}

/// Resolve the input to a color, falling back to black under the lenient
/// policy.
pub fn resolve_input(input: ColorInfoInput, policy: InvalidColorPolicy) -> Result<Color, String> {
    let resolved = ColorSpec::from_fields(
        input.rgb,
        input.hex,
        input.hsl,
        input.hsv,
        input.cmyk,
        input.color,
    )
    .and_then(|spec| spec.resolve());

    match (resolved, policy) {
        (Ok(color), _) => Ok(color),
        (Err(_), InvalidColorPolicy::Black) => Ok(Color::BLACK),
        (Err(e), InvalidColorPolicy::Error) => Err(e.to_string()),
    }
}

pub fn run_color_info(input: ColorInfoInput, policy: InvalidColorPolicy) -> ToolResult {
    let color = resolve_input(input, policy)?;
    to_pretty_json(&ColorDescriptor::from_color(&color))
}
