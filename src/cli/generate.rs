//! Generation command implementations (scheme, classic, palette, harmony)

use serde::Serialize;
use std::process::ExitCode;

use crate::color::{parse_color, Color};
use crate::descriptor::ColorDescriptor;
use crate::scheme::tokens::export;
use crate::scheme::{
    classic_scheme, generate_palette, random_scheme_descriptors, HarmonyKind, TokenFormat,
};

use super::{print_json, Context, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Debug, Serialize)]
struct SchemeOutput {
    seed: String,
    scheme: Vec<ColorDescriptor>,
}

#[derive(Debug, Serialize)]
struct HarmonyOutput {
    kind: HarmonyKind,
    harmonies: Vec<Color>,
}

fn parse_or_report(ctx: &Context, command: &str, input: &str) -> Result<Color, ExitCode> {
    parse_color(input).map_err(|e| ctx.color_error(command, input, &e))
}

/// Execute the scheme command
pub fn run_scheme(
    ctx: &Context,
    color: &str,
    count: Option<usize>,
    seed: Option<String>,
    mode: Option<HarmonyKind>,
) -> ExitCode {
    let base = match parse_or_report(ctx, "scheme", color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let count = count.unwrap_or(ctx.config.defaults.scheme_count);
    let seed = seed.unwrap_or_else(|| format!("{:016x}", rand::random::<u64>()));
    let scheme = random_scheme_descriptors(&base, count, &seed, mode);
    print_json(&SchemeOutput { seed, scheme })
}

/// Execute the classic command
pub fn run_classic(ctx: &Context, color: &str, mode: &str, count: usize) -> ExitCode {
    let seed = match parse_or_report(ctx, "classic", color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    match classic_scheme(&seed, mode, count) {
        Ok(scheme) => print_json(&scheme),
        Err(e) => ctx.color_error("classic", mode, &e),
    }
}

/// Execute the palette command
pub fn run_palette(
    ctx: &Context,
    color: &str,
    mode: Option<HarmonyKind>,
    format: TokenFormat,
) -> ExitCode {
    let seed = match parse_or_report(ctx, "palette", color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let palette = generate_palette(&seed, mode.unwrap_or(ctx.config.defaults.palette_mode));
    match export(&palette, format) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the harmony command
pub fn run_harmony(ctx: &Context, color: &str, kind: HarmonyKind) -> ExitCode {
    let base = match parse_or_report(ctx, "harmony", color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    print_json(&HarmonyOutput { kind, harmonies: kind.apply(&base) })
}
