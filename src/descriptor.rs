//! The color descriptor: every representation of one color in a single record.

use serde::Serialize;

use crate::color::{Cmyk, Color, Hsl, Hsv, Lab, Rgb, Xyz};
use crate::contrast::{self, round_to};
use crate::manipulate::{self, MinifyOptions};
use crate::named;

const IMAGE_BASE: &str = "https://www.thecolorapi.com/id?format=svg";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexField {
    pub value: String,
    pub clean: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RgbField {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub value: String,
    pub fraction: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HslField {
    pub h: u16,
    pub s: u8,
    pub l: u8,
    pub value: String,
    pub fraction: Hsl,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsvField {
    pub h: u16,
    pub s: u8,
    pub v: u8,
    pub value: String,
    pub fraction: Hsv,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CmykField {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
    pub value: String,
    pub fraction: Cmyk,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyzField {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
    #[serde(rename = "Z")]
    pub z: i32,
    pub value: String,
    pub fraction: Xyz,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabField {
    pub l: i32,
    pub a: i32,
    pub b: i32,
    pub value: String,
    pub fraction: Lab,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameField {
    pub value: String,
    pub closest_named_hex: String,
    pub exact_match_name: bool,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastField {
    /// `#000000` or `#FFFFFF`, whichever reads better on this color
    pub value: String,
    /// Contrast ratio of `value` against this color
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageField {
    pub bare: String,
    pub named: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Href {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Href,
}

/// Normalized description of a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorDescriptor {
    pub hex: HexField,
    pub rgb: RgbField,
    pub hsl: HslField,
    pub hsv: HsvField,
    pub cmyk: CmykField,
    #[serde(rename = "XYZ")]
    pub xyz: XyzField,
    pub lab: LabField,
    pub name: NameField,
    pub contrast: ContrastField,
    /// Hue in whole degrees
    pub hue: u16,
    pub luminance: f64,
    pub brightness: f64,
    #[serde(rename = "isLight")]
    pub is_light: bool,
    #[serde(rename = "isDark")]
    pub is_dark: bool,
    pub minified: String,
    pub image: ImageField,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Scale a unit fraction to a whole percent.
fn percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scale a hue fraction to whole degrees, with 360 folded onto 0.
fn degrees(h: f64) -> u16 {
    ((h * 360.0).round() as u16) % 360
}

impl ColorDescriptor {
    pub fn from_color(color: &Color) -> Self {
        let hex = color.to_hex();
        let clean = color.clean_hex();

        let rgb = color.to_rgb();
        let hsl = color.to_hsl();
        let hsv = color.to_hsv();
        let cmyk = color.to_cmyk();
        let xyz = color.to_xyz();
        let lab = color.to_lab();

        let (hh, hs, hl) = (degrees(hsl.h), percent(hsl.s), percent(hsl.l));
        let (vh, vs, vv) = (degrees(hsv.h), percent(hsv.s), percent(hsv.v));
        let (c, m, y, k) = (percent(cmyk.c), percent(cmyk.m), percent(cmyk.y), percent(cmyk.k));
        let (x, yy, z) = (
            (xyz.x * 100.0).round() as i32,
            (xyz.y * 100.0).round() as i32,
            (xyz.z * 100.0).round() as i32,
        );
        let (ll, la, lb) = (lab.l.round() as i32, lab.a.round() as i32, lab.b.round() as i32);

        let nearest = named::nearest(color);
        let foreground = contrast::best_foreground(color);

        Self {
            hex: HexField { value: hex, clean: clean.clone() },
            rgb: RgbField {
                r: color.r,
                g: color.g,
                b: color.b,
                value: format!("rgb({}, {}, {})", color.r, color.g, color.b),
                fraction: rgb,
            },
            hsl: HslField {
                h: hh,
                s: hs,
                l: hl,
                value: format!("hsl({}, {}%, {}%)", hh, hs, hl),
                fraction: hsl,
            },
            hsv: HsvField {
                h: vh,
                s: vs,
                v: vv,
                value: format!("hsv({}, {}%, {}%)", vh, vs, vv),
                fraction: hsv,
            },
            cmyk: CmykField {
                c,
                m,
                y,
                k,
                value: format!("cmyk({}, {}, {}, {})", c, m, y, k),
                fraction: cmyk,
            },
            xyz: XyzField { x, y: yy, z, value: format!("XYZ({}, {}, {})", x, yy, z), fraction: xyz },
            lab: LabField {
                l: ll,
                a: la,
                b: lb,
                value: format!("lab({}, {}, {})", ll, la, lb),
                fraction: lab,
            },
            name: NameField {
                value: nearest.name,
                closest_named_hex: nearest.closest_hex,
                exact_match_name: nearest.exact,
                distance: nearest.distance,
            },
            contrast: ContrastField {
                value: foreground.to_hex(),
                ratio: round_to(contrast::contrast_ratio(&foreground, color), 2),
            },
            hue: hh,
            luminance: round_to(contrast::relative_luminance(color), 4),
            brightness: round_to(contrast::brightness(color), 4),
            is_light: contrast::is_light(color),
            is_dark: contrast::is_dark(color),
            minified: manipulate::minify(color, &MinifyOptions::default()),
            image: ImageField {
                bare: format!("{}&named=false&hex={}", IMAGE_BASE, clean),
                named: format!("{}&hex={}", IMAGE_BASE, clean),
            },
            links: Links { self_link: Href { href: format!("/id?hex={}", clean) } },
        }
    }
}

impl From<&Color> for ColorDescriptor {
    fn from(color: &Color) -> Self {
        ColorDescriptor::from_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_descriptor() {
        let d = ColorDescriptor::from_color(&Color::new(255, 0, 0));
        assert_eq!(d.hex.value, "#FF0000");
        assert_eq!(d.hex.clean, "FF0000");
        assert_eq!((d.rgb.r, d.rgb.g, d.rgb.b), (255, 0, 0));
        assert_eq!(d.rgb.value, "rgb(255, 0, 0)");
        assert_eq!((d.hsl.h, d.hsl.s, d.hsl.l), (0, 100, 50));
        assert_eq!(d.hsl.value, "hsl(0, 100%, 50%)");
        assert_eq!(d.hsv.value, "hsv(0, 100%, 100%)");
        assert_eq!((d.cmyk.c, d.cmyk.m, d.cmyk.y, d.cmyk.k), (0, 100, 100, 0));
        assert_eq!(d.cmyk.value, "cmyk(0, 100, 100, 0)");
        assert_eq!(d.xyz.value, "XYZ(41, 21, 2)");
        assert_eq!(d.name.value, "Red");
        assert!(d.name.exact_match_name);
        assert_eq!(d.name.distance, 0.0);
        assert_eq!(d.contrast.value, "#000000");
        assert_eq!(d.minified, "#f00");
    }

    #[test]
    fn test_links() {
        let d = ColorDescriptor::from_color(&Color::new(0, 87, 184));
        assert_eq!(d.image.bare, "https://www.thecolorapi.com/id?format=svg&named=false&hex=0057B8");
        assert_eq!(d.image.named, "https://www.thecolorapi.com/id?format=svg&hex=0057B8");
        assert_eq!(d.links.self_link.href, "/id?hex=0057B8");
    }

    #[test]
    fn test_hue_near_360_folds_to_zero() {
        // Hue 359.6 rounds to 360 and must be reported as 0
        let d = ColorDescriptor::from_color(&Color::new(255, 0, 2));
        assert_eq!(d.hsl.h, 0);
    }

    #[test]
    fn test_json_shape() {
        let d = ColorDescriptor::from_color(&Color::WHITE);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["XYZ"]["Y"], 100);
        assert_eq!(json["_links"]["self"]["href"], "/id?hex=FFFFFF");
        assert_eq!(json["isLight"], true);
        assert_eq!(json["rgb"]["fraction"]["r"], 1.0);
        assert_eq!(json["contrast"]["value"], "#000000");
        assert_eq!(json["contrast"]["ratio"], 21.0);
    }
}
