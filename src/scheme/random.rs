//! Seeded random schemes.
//!
//! A scheme is a harmony block followed by tints, shades and tones of the
//! base color. Block sizes come from stick-breaking with a generator seeded
//! from the caller's seed string, so equal inputs give equal schemes.

use rand::Rng;

use crate::color::Color;
use crate::descriptor::ColorDescriptor;
use crate::manipulate::rotate_hue;
use crate::scheme::mix::mix_steps;
use crate::scheme::rng::{rng_from_seed, stick_break};
use crate::scheme::HarmonyKind;

/// Block sizes of a random scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Buckets {
    harmony: usize,
    tints: usize,
    shades: usize,
    tones: usize,
}

/// The harmony block: the requested kind, a random kind of matching size, or
/// evenly spaced rotations when no kind has that size.
fn harmony_block<R: Rng + ?Sized>(
    rng: &mut R,
    base: &Color,
    size: usize,
    requested: Option<HarmonyKind>,
) -> Vec<Color> {
    if let Some(kind) = requested {
        return kind.apply(base);
    }
    let candidates: Vec<HarmonyKind> =
        HarmonyKind::ALL.iter().copied().filter(|k| k.size() == size).collect();
    if candidates.is_empty() {
        return (0..size)
            .map(|i| if i == 0 { *base } else { rotate_hue(base, i as f64 * 360.0 / size as f64) })
            .collect();
    }
    let pick = candidates[rng.random_range(0..candidates.len())];
    pick.apply(base)
}

/// `count` colors derived from `base`, reproducible for a given `seed`.
///
/// A requested harmony that fits in `count` is placed first and the rest is
/// split among tints, shades and tones. Otherwise the whole count is split
/// four ways and the harmony block is chosen to fit its share.
pub fn random_scheme(
    base: &Color,
    count: usize,
    seed: &str,
    harmony: Option<HarmonyKind>,
) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    let mut rng = rng_from_seed(seed);

    let requested = harmony.filter(|k| k.size() <= count);
    let buckets = match requested {
        Some(kind) => {
            let rest = stick_break(&mut rng, count - kind.size(), 3);
            Buckets { harmony: kind.size(), tints: rest[0], shades: rest[1], tones: rest[2] }
        }
        None => {
            let split = stick_break(&mut rng, count, 4);
            Buckets { tints: split[0], shades: split[1], tones: split[2], harmony: split[3] }
        }
    };

    let mut colors = harmony_block(&mut rng, base, buckets.harmony, requested);
    colors.extend(mix_steps(base, &Color::WHITE, buckets.tints));
    colors.extend(mix_steps(base, &Color::BLACK, buckets.shades));
    colors.extend(mix_steps(base, &Color::GRAY, buckets.tones));
    colors
}

/// [`random_scheme`] with a full descriptor per color.
pub fn random_scheme_descriptors(
    base: &Color,
    count: usize,
    seed: &str,
    harmony: Option<HarmonyKind>,
) -> Vec<ColorDescriptor> {
    random_scheme(base, count, seed, harmony).iter().map(ColorDescriptor::from_color).collect()
}
