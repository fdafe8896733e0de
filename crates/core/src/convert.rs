//! Conversions between `Rgb`, `Hsl`, and `Cmyk`.
//!
//! These follow the Photoshop-style model used by the picker: luminance is
//! the brightest channel (`max / 255`) and saturation is `diff / max`, so HSL
//! here behaves like HSB. HSL -> RGB uses the six-sector piecewise-linear
//! interpolation of Foley and van Dam. All byte outputs go through
//! [`round_to_int`] and are then saturated into [0, 255].
//!
//! CMYK quirk: the forward conversion computes K but does not subtract it
//! from C, M, Y, and the inverse ignores K entirely. RGB -> CMYK -> RGB is
//! therefore stable, while any K carried by a CMYK value is lost on its way to
//! RGB. This is relied upon by the picker and must not be "fixed".

use crate::color::{Cmyk, Hsl, Rgb};
use crate::rounding::round_to_int;

/// Channel span of one hue sector: 255 * 6.
const SECTOR_SPAN: f64 = 1530.0;

/// Converts an ARGB color to HSL.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (r, g, b) = (c.r as i32, c.g as i32, c.b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let l = max as f64 / 255.0;
    let s = if max == 0 {
        0.0
    } else {
        diff as f64 / max as f64
    };

    let q = if diff == 0 { 0.0 } else { 60.0 / diff as f64 };
    let h = if max == r {
        if g < b {
            (360.0 + q * (g - b) as f64) / 360.0
        } else {
            (q * (g - b) as f64) / 360.0
        }
    } else if max == g {
        (120.0 + q * (b - r) as f64) / 360.0
    } else {
        (240.0 + q * (r - g) as f64) / 360.0
    };

    Hsl::with_alpha(h, s, l, c.a as f64 / 255.0)
}

/// Converts HSL to an ARGB color.
///
/// Each 60 degree sector holds one channel at `max`, one at `min`, and
/// interpolates the third. A hue that matches no sector (only possible for
/// NaN, since `Hsl` clamps) yields black with the requested alpha.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let alpha = round_to_int(255.0 * hsl.a());
    let h = hsl.h();

    let max = round_to_int(hsl.l() * 255.0);
    let min = round_to_int((1.0 - hsl.s()) * hsl.l() * 255.0);
    let q = (max - min) as f64 / 255.0;

    let rising = |start: f64| round_to_int((h - start) * q * SECTOR_SPAN + min as f64);
    let falling = |start: f64| round_to_int(-((h - start) * q) * SECTOR_SPAN + max as f64);

    if (0.0..=1.0 / 6.0).contains(&h) {
        Rgb::from_argb_clamped(alpha, max, rising(0.0), min)
    } else if h <= 1.0 / 3.0 {
        Rgb::from_argb_clamped(alpha, falling(1.0 / 6.0), max, min)
    } else if h <= 0.5 {
        Rgb::from_argb_clamped(alpha, min, max, rising(1.0 / 3.0))
    } else if h <= 2.0 / 3.0 {
        Rgb::from_argb_clamped(alpha, min, falling(0.5), max)
    } else if h <= 5.0 / 6.0 {
        Rgb::from_argb_clamped(alpha, rising(2.0 / 3.0), min, max)
    } else if h <= 1.0 {
        Rgb::from_argb_clamped(alpha, max, min, falling(5.0 / 6.0))
    } else {
        Rgb::from_argb_clamped(alpha, 0, 0, 0)
    }
}

/// Converts an ARGB color to CMYK.
///
/// `C`, `M`, `Y` are the complements of the channels. `K` is the smallest of
/// them when that is above zero and stays 0 otherwise; it is not subtracted
/// from the other three.
pub fn rgb_to_cmyk(c: Rgb) -> Cmyk {
    let cyan = (255 - c.r as i32) as f64 / 255.0;
    let magenta = (255 - c.g as i32) as f64 / 255.0;
    let yellow = (255 - c.b as i32) as f64 / 255.0;

    let low = cyan.min(magenta).min(yellow).min(1.0);
    let key = if low > 0.0 { low } else { 0.0 };

    Cmyk::with_alpha(cyan, magenta, yellow, key, c.a as f64 / 255.0)
}

/// Converts CMYK to an ARGB color. `K` is ignored.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    Rgb::from_argb_clamped(
        round_to_int(255.0 * cmyk.a()),
        round_to_int(255.0 - 255.0 * cmyk.c()),
        round_to_int(255.0 - 255.0 * cmyk.m()),
        round_to_int(255.0 - 255.0 * cmyk.y()),
    )
}
