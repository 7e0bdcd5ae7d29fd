//! MCP export-color-tokens tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{keyed, ToolResult};
use crate::scheme::tokens::export;
use crate::scheme::{Palette, TokenFormat};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExportTokensInput {
    #[schemars(
        with = "serde_json::Value",
        description = "Palette object as returned by generate-color-scheme: role name to list of swatches"
    )]
    pub palette: Palette,
    #[schemars(description = "Token output format: json (default), css or scss")]
    pub format: Option<TokenFormat>,
}

pub fn run_export_tokens(input: ExportTokensInput) -> ToolResult {
    let output = export(&input.palette, input.format.unwrap_or_default()).map_err(|e| e.to_string())?;
    keyed("output", output)
}
