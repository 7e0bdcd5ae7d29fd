//! Configuration schema types for `chroma.toml`
//!
//! Every section and field is optional; missing values take the defaults
//! below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scheme::{HarmonyKind, VisionDeficiency};

/// What adapters do with a color query that fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidColorPolicy {
    /// Report the validation error
    #[default]
    Error,
    /// Substitute `#000000` and carry on
    Black,
}

/// Defaults for generation requests that omit a value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Colors in a random scheme
    #[serde(default = "default_scheme_count")]
    pub scheme_count: usize,
    /// Harmony used for role palettes
    #[serde(default = "default_palette_mode")]
    pub palette_mode: HarmonyKind,
    /// Colors in a tint, shade or tone ramp
    #[serde(default = "default_ramp_count")]
    pub ramp_count: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scheme_count: default_scheme_count(),
            palette_mode: default_palette_mode(),
            ramp_count: default_ramp_count(),
        }
    }
}

fn default_scheme_count() -> usize {
    6
}

fn default_palette_mode() -> HarmonyKind {
    HarmonyKind::Analogous
}

fn default_ramp_count() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub on_invalid: InvalidColorPolicy,
}

/// Settings for the color-blind safety adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorBlindConfig {
    /// Simulation used when a request does not name one
    #[serde(default)]
    pub vision: VisionDeficiency,
    /// Smallest acceptable ΔE76 between simulated colors
    #[serde(default = "default_min_delta")]
    pub min_delta: f64,
    /// Hue nudges tried per color
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for ColorBlindConfig {
    fn default() -> Self {
        Self {
            vision: VisionDeficiency::default(),
            min_delta: default_min_delta(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_min_delta() -> f64 {
    10.0
}

fn default_max_attempts() -> u32 {
    15
}

/// Local error log settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Append failed requests to `error_log`
    #[serde(default)]
    pub collect_errors: bool,
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { collect_errors: false, error_log: default_error_log() }
    }
}

fn default_error_log() -> PathBuf {
    PathBuf::from(".chroma-errors.jsonl")
}

/// Complete chroma.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChromaConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub color_blind: ColorBlindConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Dotted path of the field, e.g. "defaults.scheme_count"
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chroma.toml: '{}' {}", self.field, self.message)
    }
}

impl ChromaConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut fail = |field: &str, message: &str| {
            errors.push(ConfigValidationError {
                field: field.to_string(),
                message: message.to_string(),
            })
        };

        if self.defaults.scheme_count == 0 {
            fail("defaults.scheme_count", "must be a positive integer");
        }
        if self.defaults.ramp_count == 0 {
            fail("defaults.ramp_count", "must be a positive integer");
        }
        if !self.color_blind.min_delta.is_finite() || self.color_blind.min_delta <= 0.0 {
            fail("color_blind.min_delta", "must be a positive number");
        }
        if self.telemetry.collect_errors && self.telemetry.error_log.as_os_str().is_empty() {
            fail("telemetry.error_log", "must be set when collect_errors is enabled");
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ChromaConfig = toml::from_str("").unwrap();
        assert_eq!(config.defaults.scheme_count, 6);
        assert_eq!(config.defaults.palette_mode, HarmonyKind::Analogous);
        assert_eq!(config.defaults.ramp_count, 5);
        assert_eq!(config.validation.on_invalid, InvalidColorPolicy::Error);
        assert_eq!(config.color_blind.vision, VisionDeficiency::Deuteranopia);
        assert_eq!(config.color_blind.min_delta, 10.0);
        assert_eq!(config.color_blind.max_attempts, 15);
        assert!(!config.telemetry.collect_errors);
        assert_eq!(config.telemetry.error_log, PathBuf::from(".chroma-errors.jsonl"));
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[defaults]
scheme_count = 10
palette_mode = "split-complementary"
ramp_count = 7

[validation]
on_invalid = "black"

[color_blind]
vision = "tritanopia"
min_delta = 12.5
max_attempts = 30

[telemetry]
collect_errors = true
error_log = "logs/errors.jsonl"
"#;
        let config: ChromaConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.scheme_count, 10);
        assert_eq!(config.defaults.palette_mode, HarmonyKind::SplitComplementary);
        assert_eq!(config.defaults.ramp_count, 7);
        assert_eq!(config.validation.on_invalid, InvalidColorPolicy::Black);
        assert_eq!(config.color_blind.vision, VisionDeficiency::Tritanopia);
        assert_eq!(config.color_blind.min_delta, 12.5);
        assert_eq!(config.color_blind.max_attempts, 30);
        assert!(config.telemetry.collect_errors);
        assert_eq!(config.telemetry.error_log, PathBuf::from("logs/errors.jsonl"));
    }

    #[test]
    fn test_unknown_enum_value_is_a_parse_error() {
        let result: Result<ChromaConfig, _> = toml::from_str("[defaults]\npalette_mode = \"pentadic\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_reports_every_field() {
        let toml = r#"
[defaults]
scheme_count = 0
ramp_count = 0

[color_blind]
min_delta = -1.0
"#;
        let config: ChromaConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["defaults.scheme_count", "defaults.ramp_count", "color_blind.min_delta"]);
        assert_eq!(errors[0].to_string(), "chroma.toml: 'defaults.scheme_count' must be a positive integer");
    }
}
