//! Configuration loading and discovery for `chroma.toml`
//!
//! Provides functions to find, load, and merge configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::{ChromaConfig, InvalidColorPolicy};
use crate::scheme::{HarmonyKind, VisionDeficiency};

pub const CONFIG_FILE: &str = "chroma.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse chroma.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub scheme_count: Option<usize>,
    pub palette_mode: Option<HarmonyKind>,
    pub on_invalid: Option<InvalidColorPolicy>,
    pub vision: Option<VisionDeficiency>,
    pub collect_errors: Option<bool>,
    pub error_log: Option<PathBuf>,
}

/// Find chroma.toml.
///
/// Search order:
/// 1. Walk up from the current directory
/// 2. `$XDG_CONFIG_HOME/chromakit/chroma.toml` (or `~/.config/chromakit/chroma.toml`)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

pub fn find_xdg_config() -> Option<PathBuf> {
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let path = config_home.join("chromakit").join(CONFIG_FILE);
    path.exists().then_some(path)
}

/// Find chroma.toml by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the discovered file is used,
/// or the defaults when there is none.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("brand/chroma.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ChromaConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<ChromaConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ChromaConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

pub fn default_config() -> ChromaConfig {
    ChromaConfig::default()
}

/// Apply CLI arguments on top of file values.
pub fn merge_cli_overrides(config: &mut ChromaConfig, overrides: &CliOverrides) {
    if let Some(count) = overrides.scheme_count {
        config.defaults.scheme_count = count;
    }
    if let Some(mode) = overrides.palette_mode {
        config.defaults.palette_mode = mode;
    }
    if let Some(policy) = overrides.on_invalid {
        config.validation.on_invalid = policy;
    }
    if let Some(vision) = overrides.vision {
        config.color_blind.vision = vision;
    }
    if let Some(collect) = overrides.collect_errors {
        config.telemetry.collect_errors = collect;
    }
    if let Some(ref log) = overrides.error_log {
        config.telemetry.error_log = log.clone();
    }
}
