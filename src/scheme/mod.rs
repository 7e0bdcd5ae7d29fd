//! Palette and scheme generation.
//!
//! Everything here is a pure function of its inputs. Seeded generation
//! builds a fresh generator per call from the seed string.

pub mod colorblind;
pub mod harmony;
pub mod mix;
pub mod modes;
pub mod random;
pub mod rng;
pub mod tokens;
pub mod tonal;

pub use colorblind::{
    ensure_color_blind_safe, ColorBlindCheck, ColorBlindOptions, VisionDeficiency,
};
pub use harmony::HarmonyKind;
pub use mix::{shades, tints, tones};
pub use modes::{classic_scheme, find_mode, ClassicScheme, SchemeMode, SCHEME_MODES};
pub use random::{random_scheme, random_scheme_descriptors};
pub use tokens::TokenFormat;
pub use tonal::{generate_palette, tonal_ramp, Palette, Swatch, ROLES, TONES};
