//! Perceptual color difference in CIELAB.
//!
//! - CIE76: Euclidean distance, the plain ΔE
//! - CIEDE2000: lightness, chroma and hue weighting plus the blue rotation term

use std::f64::consts::PI;

use crate::color::{Color, Lab};

const TWO_PI: f64 = 2.0 * PI;
const POW25_7: f64 = 6_103_515_625.0; // 25^7

/// CIE76 ΔE between two Lab colors.
pub fn delta_e76_lab(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 ΔE between two sRGB colors.
pub fn delta_e76(a: &Color, b: &Color) -> f64 {
    delta_e76_lab(a.to_lab(), b.to_lab())
}

/// CIEDE2000 ΔE between two sRGB colors.
pub fn delta_e2000(a: &Color, b: &Color) -> f64 {
    delta_e2000_lab(a.to_lab(), b.to_lab())
}

/// CIEDE2000 ΔE between two Lab colors, with kL = kC = kH = 1.
pub fn delta_e2000_lab(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);
    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    let dl_prime = l2 - l1;
    let dc_prime = c2_prime - c1_prime;
    let chroma_product = c1_prime * c2_prime;

    let dh_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= PI {
            diff
        } else if diff > PI {
            diff - TWO_PI
        } else {
            diff + TWO_PI
        }
    };
    let dh_prime_big = 2.0 * chroma_product.sqrt() * (dh_prime / 2.0).sin();

    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;
    let h_bar_prime = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= PI {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < TWO_PI {
        (h1_prime + h2_prime + TWO_PI) / 2.0
    } else {
        (h1_prime + h2_prime - TWO_PI) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_prime - 30f64.to_radians()).cos()
        + 0.24 * (2.0 * h_bar_prime).cos()
        + 0.32 * (3.0 * h_bar_prime + 6f64.to_radians()).cos()
        - 0.20 * (4.0 * h_bar_prime - 63f64.to_radians()).cos();

    let l_offset_sq = (l_bar_prime - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_bar_prime;
    let sh = 1.0 + 0.015 * c_bar_prime * t;

    let delta_theta = 30f64.to_radians()
        * (-((h_bar_prime - 275f64.to_radians()) / 25f64.to_radians()).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let rc = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * delta_theta).sin();

    let dl_term = dl_prime / sl;
    let dc_term = dc_prime / sc;
    let dh_term = dh_prime_big / sh;

    (dl_term * dl_term + dc_term * dc_term + dh_term * dh_term + rt * dc_term * dh_term).sqrt()
}

/// Hue angle in radians, [0, 2π); achromatic points get 0.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).rem_euclid(TWO_PI)
    }
}
