//! Design-token export for palettes.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorError;
use crate::scheme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum TokenFormat {
    #[default]
    Json,
    Css,
    Scss,
}

impl FromStr for TokenFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TokenFormat::Json),
            "css" => Ok(TokenFormat::Css),
            "scss" => Ok(TokenFormat::Scss),
            _ => Err(ColorError::InvalidArgument(format!(
                "Unknown token format '{}'. Expected json, css or scss",
                s
            ))),
        }
    }
}

/// CSS custom properties on `:root`, one per swatch: `--{role}-{tone}`.
pub fn to_css_vars(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for (role, swatches) in palette.iter() {
        for swatch in swatches {
            let _ = writeln!(out, "  --{}-{}: {};", role, swatch.role, swatch.hex);
        }
    }
    out.push('}');
    out
}

/// A nested SCSS map named `$palette`.
pub fn to_scss_map(palette: &Palette) -> String {
    let mut out = String::from("$palette: (\n");
    for (role, swatches) in palette.iter() {
        let _ = writeln!(out, "  {}: (", role);
        for swatch in swatches {
            let _ = writeln!(out, "    {}: {},", swatch.role, swatch.hex);
        }
        out.push_str("  ),\n");
    }
    out.push_str(");");
    out
}

pub fn to_json(palette: &Palette) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(palette)
}

/// Render `palette` in `format`.
pub fn export(palette: &Palette, format: TokenFormat) -> Result<String, ColorError> {
    match format {
        TokenFormat::Json => to_json(palette)
            .map_err(|e| ColorError::InvalidArgument(format!("Failed to serialize palette: {}", e))),
        TokenFormat::Css => Ok(to_css_vars(palette)),
        TokenFormat::Scss => Ok(to_scss_map(palette)),
    }
}
