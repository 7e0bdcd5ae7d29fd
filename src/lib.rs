//! Chromakit - Library for color conversion, naming and palette generation
//!
//! This library provides functionality to:
//! - Parse colors from hex, rgb(), hsl(), hsv(), cmyk() and CSS names
//! - Describe a color in every common color space, with its nearest name
//! - Measure luminance, contrast, readability and perceptual difference
//! - Generate harmonies, tonal palettes, classic and seeded random schemes
//! - Serve all of the above as MCP tools (feature `mcp`)

pub mod cli;
pub mod color;
pub mod config;
pub mod contrast;
pub mod descriptor;
pub mod difference;
pub mod manipulate;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod named;
pub mod scheme;
pub mod telemetry;
