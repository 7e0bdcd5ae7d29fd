//! Library-level tests for descriptors, named colors and scheme generation
//!
//! These exercise the public API end to end, the way the MCP tools and the
//! CLI use it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chromakit::color::hex::{hex_check, normalize_hex};
use chromakit::color::{Color, ColorSpec, Hsl};
use chromakit::contrast::{best_foreground, contrast_ratio, round_to};
use chromakit::descriptor::ColorDescriptor;
use chromakit::named::{find_by_name, named_colors, nearest};
use chromakit::scheme::tokens::export;
use chromakit::scheme::{
    ensure_color_blind_safe, generate_palette, random_scheme, tonal_ramp, ColorBlindOptions,
    HarmonyKind, Palette, TokenFormat, VisionDeficiency, SCHEME_MODES,
};

fn hex(s: &str) -> Color {
    Color::from_hex(s).expect("test colors are valid hex")
}

fn hue_distance(a: &Color, b: &Color) -> f64 {
    let d = (a.to_hsl().hue_degrees() - b.to_hsl().hue_degrees()).abs();
    d.min(360.0 - d)
}

// ── Conversions ───────────────────────────────────────────────────────

#[test]
fn test_descriptor_for_pure_red() {
    let spec = ColorSpec::from_fields(None, Some("FF0000".into()), None, None, None, None)
        .expect("hex field should be picked");
    let color = spec.resolve().expect("FF0000 is valid");
    let d = ColorDescriptor::from_color(&color);

    assert_eq!((d.rgb.r, d.rgb.g, d.rgb.b), (255, 0, 0));
    assert_eq!((d.hsl.h, d.hsl.s, d.hsl.l), (0, 100, 50));
    assert_eq!((d.cmyk.c, d.cmyk.m, d.cmyk.y, d.cmyk.k), (0, 100, 100, 0));
    assert_eq!(d.name.value, "Red");
    assert!(d.name.exact_match_name);
    assert_eq!(d.name.distance, 0.0);
    assert_eq!(d.hex.value, "#FF0000");
    assert_eq!(d.hex.clean, "FF0000");
}

#[test]
fn test_hex_and_hsl_round_trip_on_sampled_colors() {
    let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
    for _ in 0..2000 {
        let color = Color::new(rng.random(), rng.random(), rng.random());
        assert_eq!(hex(&color.to_hex()), color);

        let back = Color::from(color.to_hsl());
        for (a, b) in [(color.r, back.r), (color.g, back.g), (color.b, back.b)] {
            assert!((a as i16 - b as i16).abs() <= 1, "{} -> {}", color, back);
        }
    }
}

#[test]
fn test_hex_normalization_boundaries() {
    assert_eq!(normalize_hex("#000").unwrap(), "#000000");
    let once = normalize_hex("0057b8").unwrap();
    assert_eq!(normalize_hex(&once).unwrap(), once);
    assert!(normalize_hex("GGG").is_err());
    assert!(normalize_hex("").is_err());
    assert_eq!(hex_check("GGG"), "#000000");
    assert_eq!(hex_check(""), "#000000");
}

// ── Names and contrast ────────────────────────────────────────────────

#[test]
fn test_named_table_entries_match_exactly() {
    for entry in named_colors() {
        let m = nearest(&entry.color);
        assert!(m.exact, "{} should match exactly", entry.name);
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.closest_hex, entry.hex);
        let named = find_by_name(&m.name).expect("matched name is in the table");
        assert_eq!(named.hex, entry.hex);
    }
}

#[test]
fn test_contrast_law_at_the_extremes() {
    assert_eq!(best_foreground(&Color::BLACK), Color::WHITE);
    assert_eq!(best_foreground(&Color::WHITE), Color::BLACK);
}

// ── Schemes ───────────────────────────────────────────────────────────

#[test]
fn test_random_scheme_is_deterministic() {
    let base = hex("#0057B8");
    let a = random_scheme(&base, 12, "brand-2024", None);
    let b = random_scheme(&base, 12, "brand-2024", None);
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);
}

#[test]
fn test_random_scheme_varies_with_seed() {
    let base = hex("#0057B8");
    let schemes: Vec<Vec<Color>> = ["a", "b", "c", "d", "e", "f", "g", "h"]
        .iter()
        .map(|seed| random_scheme(&base, 12, seed, None))
        .collect();
    assert!(schemes.iter().any(|s| s != &schemes[0]), "seeds should change the output");
}

#[test]
fn test_random_scheme_with_complementary_pair() {
    let base = hex("#0057B8");
    let scheme = random_scheme(&base, 4, "seed-1", Some(HarmonyKind::Complementary));
    assert_eq!(scheme.len(), 4);
    assert_eq!(scheme[0], base);
    assert!((hue_distance(&scheme[0], &scheme[1]) - 180.0).abs() < 2.0);
    assert_eq!(scheme, random_scheme(&base, 4, "seed-1", Some(HarmonyKind::Complementary)));
}

#[test]
fn test_tonal_ramp_lightness_and_on_color() {
    let seed = Color::from(Hsl { h: 0.6, s: 1.0, l: 0.5 });
    let ramp = tonal_ramp(&seed);
    assert_eq!(ramp.len(), 11);

    let lightness: Vec<f64> = ramp.iter().map(|s| s.hex.to_lab().l).collect();
    for pair in lightness.windows(2) {
        assert!(pair[0] > pair[1], "lightness should fall: {:?}", lightness);
    }

    for swatch in &ramp {
        assert_eq!(swatch.on_color, best_foreground(&swatch.hex));
        assert_eq!(swatch.contrast, round_to(contrast_ratio(&swatch.hex, &swatch.on_color), 2));
    }
    assert_eq!(ramp[0].on_color, Color::BLACK);
    assert_eq!(ramp[10].on_color, Color::WHITE);
}

#[test]
fn test_classic_modes_return_exact_count() {
    let seed = hex("#0057B8");
    for mode in SCHEME_MODES {
        for count in 1..=12 {
            assert_eq!(mode.generate(&seed, count).len(), count, "mode {}", mode.name);
        }
    }
}

#[test]
fn test_color_blind_check_leaves_distinct_palette_alone() {
    let palette = [Color::BLACK, Color::WHITE, hex("#0057B8")];
    let check = ensure_color_blind_safe(
        &palette,
        VisionDeficiency::Deuteranopia,
        ColorBlindOptions::default(),
    )
    .expect("three colors is enough");
    assert!(check.safe);
    assert_eq!(check.palette, palette);
}

#[test]
fn test_palette_tokens_round_trip_in_order() {
    let palette = generate_palette(&hex("#0057B8"), HarmonyKind::Tetradic);
    let json = export(&palette, TokenFormat::Json).expect("json export");
    let back: Palette = serde_json::from_str(&json).expect("exported JSON parses");
    assert_eq!(back, palette);
    assert_eq!(back.role_names(), ["primary", "secondary", "tertiary", "quaternary"]);
}
