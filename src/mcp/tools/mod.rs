//! MCP tool definitions for chromakit
//!
//! Each tool is a plain `run_*` function over a deserialized input struct.
//! It returns pretty-printed JSON on success or a caller-facing message on
//! failure; the server turns those into tool results.

pub mod analysis;
pub mod info;
pub mod manipulation;
pub mod output;
pub mod schemes;

use serde::Serialize;

use crate::color::{parse_color, Color};

/// Pretty JSON on success, a validation message on failure.
pub type ToolResult = Result<String, String>;

pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> ToolResult {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// `{ "<key>": value }`, pretty printed.
pub(crate) fn keyed<T: Serialize>(key: &str, value: T) -> ToolResult {
    let mut map = serde_json::Map::new();
    map.insert(
        key.to_string(),
        serde_json::to_value(value).map_err(|e| format!("Failed to serialize result: {}", e))?,
    );
    to_pretty_json(&map)
}

/// Parse a free-form color argument.
pub(crate) fn color_arg(input: &str) -> Result<Color, String> {
    parse_color(input).map_err(|e| e.to_string())
}

/// Reject amounts outside `[0, 1]`.
pub(crate) fn unit_arg(name: &str, value: f64) -> Result<f64, String> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("'{}' must be between 0 and 1, got {}", name, value))
    }
}

pub(crate) fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(Color::to_hex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_output() {
        let json = keyed("is-color-light", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is-color-light"], true);
    }

    #[test]
    fn test_unit_arg_bounds() {
        assert_eq!(unit_arg("amount", 0.0), Ok(0.0));
        assert_eq!(unit_arg("amount", 1.0), Ok(1.0));
        let err = unit_arg("ratio", 1.5).unwrap_err();
        assert!(err.contains("'ratio'"));
    }

    #[test]
    fn test_color_arg_message() {
        let err = color_arg("not a color").unwrap_err();
        assert!(err.starts_with("Invalid color format"));
    }
}
