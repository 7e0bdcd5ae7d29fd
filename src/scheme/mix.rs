//! Tints, shades and tones: Lab mixes toward white, black and mid gray.

use crate::color::Color;
use crate::manipulate::mix;

/// `count` colors from `base` toward `target` at ratios `i / (count - 1)`.
///
/// The first entry is `base` and the last is `target`; a single step yields
/// just `base`.
fn ramp(base: &Color, target: &Color, count: usize) -> Vec<Color> {
    match count {
        0 => Vec::new(),
        1 => vec![*base],
        n => (0..n).map(|i| mix(base, target, i as f64 / (n - 1) as f64)).collect(),
    }
}

pub fn tints(base: &Color, count: usize) -> Vec<Color> {
    ramp(base, &Color::WHITE, count)
}

pub fn shades(base: &Color, count: usize) -> Vec<Color> {
    ramp(base, &Color::BLACK, count)
}

pub fn tones(base: &Color, count: usize) -> Vec<Color> {
    ramp(base, &Color::GRAY, count)
}

/// `count` intermediate mixes that exclude both endpoints, at ratios
/// `(i + 1) / (count + 1)`.
pub(crate) fn mix_steps(base: &Color, target: &Color, count: usize) -> Vec<Color> {
    (0..count).map(|i| mix(base, target, (i + 1) as f64 / (count + 1) as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;

    fn base() -> Color {
        Color::from_hex("#0057B8").unwrap()
    }

    #[test]
    fn test_lengths_and_endpoints() {
        let t = tints(&base(), 5);
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], base());
        assert_eq!(t[4], Color::WHITE);

        let s = shades(&base(), 3);
        assert_eq!(s[0], base());
        assert_eq!(s[2], Color::BLACK);

        let g = tones(&base(), 2);
        assert_eq!(g, vec![base(), Color::GRAY]);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(tints(&base(), 1), vec![base()]);
        assert!(shades(&base(), 0).is_empty());
    }

    #[test]
    fn test_tints_get_lighter() {
        let lum: Vec<f64> = tints(&base(), 6).iter().map(relative_luminance).collect();
        assert!(lum.windows(2).all(|w| w[1] >= w[0]), "{:?}", lum);
    }

    #[test]
    fn test_shades_get_darker() {
        let lum: Vec<f64> = shades(&base(), 6).iter().map(relative_luminance).collect();
        assert!(lum.windows(2).all(|w| w[1] <= w[0]), "{:?}", lum);
    }

    #[test]
    fn test_mix_steps_skip_endpoints() {
        let steps = mix_steps(&base(), &Color::WHITE, 3);
        assert_eq!(steps.len(), 3);
        assert!(!steps.contains(&base()));
        assert!(!steps.contains(&Color::WHITE));
    }
}
