//! Conversions between color models.
//!
//! Functions here are total: any finite input produces a result. Values that
//! leave the sRGB gamut are returned unclamped so callers can test for it;
//! clamping happens when a result is quantized into a [`Color`](super::Color).

use super::model::{Cmyk, Hsl, Hsv, Lab, Lch, Rgb, Xyz};

/// D65 reference white, Y normalized to 1.
const WHITE_D65: Xyz = Xyz { x: 0.95047, y: 1.0, z: 1.08883 };

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA_SLOPE: f64 = 7.787;

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
    Hsl { h: hue_fraction(r, g, b, max, d), s, l }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(1.0) * 6.0;
    let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = hsl.l - c / 2.0;

    let (r, g, b) = match h.floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb { r: r + m, g: g + m, b: b + m }
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 { 0.0 } else { hue_fraction(r, g, b, max, d) };
    Hsv { h, s, v: max }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { s, v, .. } = hsv;
    let h = hsv.h.rem_euclid(1.0) * 6.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { r, g, b }
}

/// Six-way piecewise hue shared by HSL and HSV, as a fraction of a turn.
fn hue_fraction(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0).rem_euclid(1.0)
}

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - rgb.r;
    let m = 1.0 - rgb.g;
    let y = 1.0 - rgb.b;
    let k = c.min(m).min(y);

    if k > 0.997 {
        return Cmyk { c: 0.0, m: 0.0, y: 0.0, k };
    }
    if k > 0.003 {
        let scale = 1.0 - k;
        return Cmyk { c: (c - k) / scale, m: (m - k) / scale, y: (y - k) / scale, k };
    }
    Cmyk { c, m, y, k }
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let Cmyk { c, m, y, k } = cmyk;
    Rgb { r: 1.0 - (c * (1.0 - k) + k), g: 1.0 - (m * (1.0 - k) + k), b: 1.0 - (y * (1.0 - k) + k) }
}

/// sRGB transfer function, encoded to linear light.
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse sRGB transfer function, linear light to encoded.
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);
    Xyz {
        x: r * 0.4124 + g * 0.3576 + b * 0.1805,
        y: r * 0.2126 + g * 0.7152 + b * 0.0722,
        z: r * 0.0193 + g * 0.1192 + b * 0.9505,
    }
}

pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let Xyz { x, y, z } = xyz;
    let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let b = x * 0.0557 + y * -0.2040 + z * 1.0570;
    Rgb { r: linear_to_srgb(r), g: linear_to_srgb(g), b: linear_to_srgb(b) }
}

pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let f = |t: f64| {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            LAB_KAPPA_SLOPE * t + 16.0 / 116.0
        }
    };
    let fx = f(xyz.x / WHITE_D65.x);
    let fy = f(xyz.y / WHITE_D65.y);
    let fz = f(xyz.z / WHITE_D65.z);
    Lab { l: 116.0 * fy - 16.0, a: 500.0 * (fx - fy), b: 200.0 * (fy - fz) }
}

pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let finv = |t: f64| {
        let cubed = t * t * t;
        if cubed > LAB_EPSILON {
            cubed
        } else {
            (t - 16.0 / 116.0) / LAB_KAPPA_SLOPE
        }
    };
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;
    Xyz { x: finv(fx) * WHITE_D65.x, y: finv(fy) * WHITE_D65.y, z: finv(fz) * WHITE_D65.z }
}

pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = lab.a.hypot(lab.b);
    let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
    Lch { l: lab.l, c, h }
}

pub fn lch_to_lab(lch: Lch) -> Lab {
    let h = lch.h.to_radians();
    Lab { l: lch.l, a: lch.c * h.cos(), b: lch.c * h.sin() }
}

/// Convert Lab straight to (unclamped) sRGB.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Whether every channel lies in [0, 1], allowing for float noise.
pub fn in_gamut(rgb: Rgb) -> bool {
    const TOLERANCE: f64 = 1e-6;
    [rgb.r, rgb.g, rgb.b].iter().all(|&v| v >= -TOLERANCE && v <= 1.0 + TOLERANCE)
}
