//! CLI integration tests for the `chroma` binary.
//!
//! Each test runs in its own temporary directory so config discovery only
//! sees the files the test writes.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn chroma(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chroma"))
        .args(args)
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("failed to run chroma")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout should be JSON ({}): {}", e, stdout))
}

#[test]
fn test_info_describes_color() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["info", "red"]);
    assert_eq!(output.status.code(), Some(0));

    let info = stdout_json(&output);
    assert_eq!(info["hex"]["value"], "#FF0000");
    assert_eq!(info["rgb"]["value"], "rgb(255, 0, 0)");
    assert_eq!(info["name"]["value"], "Red");
}

#[test]
fn test_invalid_color_exits_with_usage_code() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["info", "#GGGGGG"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "stderr: {}", stderr);
}

#[test]
fn test_lenient_policy_substitutes_black() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["info", "#GGGGGG", "--on-invalid", "black"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["hex"]["value"], "#000000");
}

#[test]
fn test_config_file_sets_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chroma.toml"), "[validation]\non_invalid = \"black\"\n").unwrap();

    let output = chroma(&dir, &["info", "not-a-color"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["hex"]["value"], "#000000");
}

#[test]
fn test_broken_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chroma.toml"), "[defaults\nscheme_count = ").unwrap();

    let output = chroma(&dir, &["info", "red"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("chroma.toml"), "stderr: {}", stderr);
}

#[test]
fn test_scheme_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let args = ["scheme", "#0057B8", "-n", "6", "--seed", "brand-2024"];
    let first = stdout_json(&chroma(&dir, &args));
    let second = stdout_json(&chroma(&dir, &args));

    assert_eq!(first, second);
    assert_eq!(first["seed"], "brand-2024");
    assert_eq!(first["scheme"].as_array().unwrap().len(), 6);
}

#[test]
fn test_scheme_rejects_out_of_range_count() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["scheme", "red", "-n", "101"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_global_flags_set_generation_defaults() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["scheme", "#0057B8", "--seed", "s", "--scheme-count", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["scheme"].as_array().unwrap().len(), 3);

    let output = chroma(&dir, &["--palette-mode", "triadic", "palette", "#0057B8"]);
    let palette = stdout_json(&output);
    assert!(palette["tertiary"].is_array(), "{}", palette);
    assert!(palette.get("quaternary").is_none());
}

#[test]
fn test_classic_scheme_count() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["classic", "#0057B8", "triad", "-n", "7"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 7);
}

#[test]
fn test_palette_css_tokens() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["palette", "#0057B8", "--mode", "complementary", "--format", "css"]);
    assert_eq!(output.status.code(), Some(0));

    let css = String::from_utf8_lossy(&output.stdout);
    assert!(css.starts_with(":root {"), "css: {}", css);
    assert!(css.contains("--primary-95: "));
    assert!(css.contains("--secondary-5: "));
    assert!(!css.contains("--tertiary-"));
}

#[test]
fn test_harmony_triadic() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["harmony", "red", "triadic"]);
    let value = stdout_json(&output);
    assert_eq!(value["kind"], "triadic");
    assert_eq!(value["harmonies"], serde_json::json!(["#FF0000", "#00FF00", "#0000FF"]));
}

#[test]
fn test_contrast_report() {
    let dir = TempDir::new().unwrap();
    let output = chroma(&dir, &["contrast", "black", "white", "--level", "aaa"]);
    let report = stdout_json(&output);
    assert_eq!(report["ratio"], 21.0);
    assert_eq!(report["readable"], true);
}

#[test]
fn test_named_lookup_by_name_and_color() {
    let dir = TempDir::new().unwrap();

    let by_name = stdout_json(&chroma(&dir, &["named", "Red"]));
    assert_eq!(by_name["name"], "Red");

    let by_color = stdout_json(&chroma(&dir, &["named", "#FE0101"]));
    assert_eq!(by_color["name"], "Red");

    let table = stdout_json(&chroma(&dir, &["named"]));
    assert!(table.as_array().unwrap().len() > 100);
}

#[test]
fn test_collect_errors_appends_jsonl() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("errors.jsonl");
    let log_arg = log.to_string_lossy().to_string();

    for input in ["#GGGGGG", "rgb(300, 0, 0)"] {
        let output = chroma(&dir, &["info", input, "--collect-errors", "--error-log", &log_arg]);
        assert_eq!(output.status.code(), Some(2));
    }

    let contents = fs::read_to_string(&log).expect("error log should exist");
    let entries: Vec<serde_json::Value> =
        contents.lines().map(|l| serde_json::from_str(l).expect("JSONL line")).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["command"], "info");
    assert_eq!(entries[0]["input"], "#GGGGGG");
}
