//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations. Results go to stdout as JSON;
//! diagnostics go to stderr.

mod describe;
mod generate;
#[cfg(feature = "mcp")]
mod serve;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::color::ColorError;
use crate::config::{
    load_config, merge_cli_overrides, ChromaConfig, CliOverrides, InvalidColorPolicy,
};
use crate::contrast::{TextSize, WcagLevel};
use crate::scheme::{HarmonyKind, TokenFormat, VisionDeficiency};
use crate::telemetry::{ErrorCollector, ErrorEntry};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Chromakit - color conversion, naming, contrast and palette generation
#[derive(Parser)]
#[command(name = "chroma")]
#[command(about = "Chromakit - describe colors and generate palettes, on the command line or over MCP")]
#[command(version)]
pub struct Cli {
    /// Path to chroma.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Default scheme size when a command gives no count
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub scheme_count: Option<u16>,

    /// Default harmony for tonal palettes
    #[arg(long, global = true, value_enum)]
    pub palette_mode: Option<HarmonyKind>,

    /// What to do with an invalid color: error, or substitute black
    #[arg(long, global = true, value_enum)]
    pub on_invalid: Option<InvalidColorPolicy>,

    /// Vision deficiency used by color-blind checks
    #[arg(long, global = true, value_enum)]
    pub vision: Option<VisionDeficiency>,

    /// Append failed requests to the error log
    #[arg(long, global = true)]
    pub collect_errors: bool,

    /// Error log path (JSONL)
    #[arg(long, global = true)]
    pub error_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP (Model Context Protocol) server on stdin/stdout
    #[cfg(feature = "mcp")]
    Serve,

    /// Full descriptor for a color
    Info {
        /// Color string: hex, rgb(), hsl(), hsv(), cmyk() or a CSS name
        color: String,
    },

    /// Seeded random scheme of color descriptors
    Scheme {
        /// Seed color
        color: String,

        /// Number of colors (default from config)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(1..=100))]
        count: Option<u16>,

        /// Seed string; the same seed and color reproduce the same scheme
        #[arg(short, long)]
        seed: Option<String>,

        /// Harmony to place first in the scheme
        #[arg(short, long, value_enum)]
        mode: Option<HarmonyKind>,
    },

    /// Classic scheme: monochrome, monochrome-dark, monochrome-light, analogic,
    /// complement, analogic-complement, triad, quad
    Classic {
        /// Seed color
        color: String,

        /// Scheme mode
        #[arg(default_value = "monochrome")]
        mode: String,

        /// Number of colors
        #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u16).range(1..=100))]
        count: u16,
    },

    /// Role palette of tonal ramps
    Palette {
        /// Seed color
        color: String,

        /// Harmony that picks the role hues (default from config)
        #[arg(short, long, value_enum)]
        mode: Option<HarmonyKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: TokenFormat,
    },

    /// Harmony colors around a base color
    Harmony {
        /// Base color
        color: String,

        /// Harmony type
        #[arg(value_enum)]
        kind: HarmonyKind,
    },

    /// WCAG contrast between a foreground and a background color
    Contrast {
        /// Foreground color
        foreground: String,

        /// Background color
        background: String,

        /// Conformance level to check
        #[arg(long, value_enum, default_value = "aa")]
        level: WcagLevel,

        /// Text size to check
        #[arg(long, value_enum, default_value = "normal")]
        size: TextSize,
    },

    /// Nearest named color, a name lookup, or the full table
    Named {
        /// Color or color name (omit to list every named color)
        query: Option<String>,
    },
}

/// Loaded configuration and error log shared by every command.
pub(crate) struct Context {
    pub config: ChromaConfig,
    pub telemetry: ErrorCollector,
}

impl Context {
    /// Report a color validation failure and pick the exit code.
    pub fn color_error(&self, command: &str, input: &str, err: &ColorError) -> ExitCode {
        eprintln!("Error: {}", err);
        self.telemetry.record(&ErrorEntry::from_color_error(command, err).with_input(input));
        ExitCode::from(EXIT_INVALID_ARGS)
    }
}

/// Pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize result: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn overrides(cli: &Cli) -> CliOverrides {
    CliOverrides {
        scheme_count: cli.scheme_count.map(usize::from),
        palette_mode: cli.palette_mode,
        on_invalid: cli.on_invalid,
        vision: cli.vision,
        collect_errors: cli.collect_errors.then_some(true),
        error_log: cli.error_log.clone(),
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    merge_cli_overrides(&mut config, &overrides(&cli));
    let telemetry = ErrorCollector::from_config(&config.telemetry);
    let ctx = Context { config, telemetry };

    match cli.command {
        #[cfg(feature = "mcp")]
        Commands::Serve => serve::run_serve(ctx),
        Commands::Info { color } => describe::run_info(&ctx, &color),
        Commands::Scheme { color, count, seed, mode } => {
            generate::run_scheme(&ctx, &color, count.map(usize::from), seed, mode)
        }
        Commands::Classic { color, mode, count } => {
            generate::run_classic(&ctx, &color, &mode, usize::from(count))
        }
        Commands::Palette { color, mode, format } => {
            generate::run_palette(&ctx, &color, mode, format)
        }
        Commands::Harmony { color, kind } => generate::run_harmony(&ctx, &color, kind),
        Commands::Contrast { foreground, background, level, size } => {
            describe::run_contrast(&ctx, &foreground, &background, level, size)
        }
        Commands::Named { query } => describe::run_named(&ctx, query.as_deref()),
    }
}
