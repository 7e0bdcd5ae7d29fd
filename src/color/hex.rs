//! Hex color normalization.
//!
//! Accepts `RGB`, `#RGB`, `RRGGBB` and `#RRGGBB` in any letter case. The
//! canonical form is upper-case `#RRGGBB`.

use super::{Color, ColorError};

/// Normalize a hex string to canonical `#RRGGBB`.
///
/// ```
/// use chromakit::color::hex::normalize_hex;
///
/// assert_eq!(normalize_hex("abc").unwrap(), "#AABBCC");
/// assert_eq!(normalize_hex("#0057b8").unwrap(), "#0057B8");
/// assert!(normalize_hex("GGG").is_err());
/// ```
pub fn normalize_hex(input: &str) -> Result<String, ColorError> {
    parse_hex(input).map(|c| c.to_hex())
}

/// Parse a hex string into a [`Color`].
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid_hex(input, Some(c)));
    }

    let nibbles: Vec<u8> = digits.bytes().map(hex_value).collect();
    match nibbles.as_slice() {
        [r, g, b] => Ok(Color::new(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => Err(invalid_hex(input, None)),
    }
}

/// Lenient normalization: anything that is not valid hex becomes `#000000`.
///
/// Only used where configuration asks for the black fallback instead of an
/// error.
pub fn hex_check(input: &str) -> String {
    normalize_hex(input).unwrap_or_else(|_| Color::BLACK.to_hex())
}

/// Whether `input` is a bare or `#`-prefixed 3/6 digit hex string.
pub fn looks_like_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

fn invalid_hex(input: &str, bad: Option<char>) -> ColorError {
    let detail = match bad {
        Some(c) => format!("invalid hex character '{}'", c),
        None => "expected 3 or 6 hex digits".to_string(),
    };
    ColorError::InvalidFormat(format!(
        "'{}' is not a hex color ({}). Use #RGB or #RRGGBB, e.g. #FF0000.",
        input, detail
    ))
}
