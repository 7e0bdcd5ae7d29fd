//! Describe command implementations (info, contrast, named)

use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;

use crate::color::{parse_color, Color, ColorError};
use crate::config::InvalidColorPolicy;
use crate::contrast::{self, round_to, TextSize, WcagLevel};
use crate::descriptor::ColorDescriptor;
use crate::named;

use super::{print_json, Context};

/// Result of the contrast command
#[derive(Debug, Serialize)]
struct ContrastReport {
    foreground: Color,
    background: Color,
    ratio: f64,
    level: WcagLevel,
    size: TextSize,
    readable: bool,
    /// Pass/fail for every level and size, keyed like "AA normal"
    checks: BTreeMap<String, bool>,
}

fn contrast_report(
    foreground: Color,
    background: Color,
    level: WcagLevel,
    size: TextSize,
) -> ContrastReport {
    let mut checks = BTreeMap::new();
    for l in [WcagLevel::AA, WcagLevel::AAA] {
        for s in [TextSize::Normal, TextSize::Large] {
            let label = format!("{:?} {}", l, if s == TextSize::Large { "large" } else { "normal" });
            checks.insert(label, contrast::is_readable(&foreground, &background, l, s));
        }
    }
    ContrastReport {
        foreground,
        background,
        ratio: round_to(contrast::contrast_ratio(&foreground, &background), 2),
        level,
        size,
        readable: contrast::is_readable(&foreground, &background, level, size),
        checks,
    }
}

/// Execute the info command
pub fn run_info(ctx: &Context, input: &str) -> ExitCode {
    let color = match (parse_color(input), ctx.config.validation.on_invalid) {
        (Ok(color), _) => color,
        (Err(_), InvalidColorPolicy::Black) => Color::BLACK,
        (Err(e), InvalidColorPolicy::Error) => return ctx.color_error("info", input, &e),
    };
    print_json(&ColorDescriptor::from_color(&color))
}

/// Execute the contrast command
pub fn run_contrast(
    ctx: &Context,
    foreground: &str,
    background: &str,
    level: WcagLevel,
    size: TextSize,
) -> ExitCode {
    let fg = match parse_color(foreground) {
        Ok(c) => c,
        Err(e) => return ctx.color_error("contrast", foreground, &e),
    };
    let bg = match parse_color(background) {
        Ok(c) => c,
        Err(e) => return ctx.color_error("contrast", background, &e),
    };
    print_json(&contrast_report(fg, bg, level, size))
}

/// Execute the named command
///
/// No query lists the table. A query that names a table entry returns that
/// entry; anything else is parsed as a color and matched to the nearest name.
pub fn run_named(ctx: &Context, query: Option<&str>) -> ExitCode {
    let Some(query) = query else {
        return print_json(named::named_colors());
    };
    if let Some(entry) = named::find_by_name(query) {
        return print_json(entry);
    }
    match parse_color(query) {
        Ok(color) => print_json(&named::nearest(&color)),
        Err(_) => ctx.color_error(
            "named",
            query,
            &ColorError::InvalidFormat(format!(
                "'{}' is neither a known color name nor a valid color",
                query
            )),
        ),
    }
}
