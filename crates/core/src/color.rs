//! Color value types: `Rgb`, `Hsl`, and `Cmyk`.
//!
//! `Rgb` holds 8-bit ARGB bytes. `Hsl` and `Cmyk` hold `f64` channels that are
//! clamped into [0, 1] whenever a value is built, so a partially valid color
//! can never be observed. Out-of-range input is saturated, never rejected.
//! Hue is normalized too: 1.0 means 360 degrees.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Saturates `v` into [0, 1]. NaN passes through untouched.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v > 1.0 {
        1.0
    } else if v < 0.0 {
        0.0
    } else {
        v
    }
}

/// Saturates `v` into a byte.
pub(crate) fn clamp_byte(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// 8-bit ARGB color.
///
/// Serializes as a `"#AARRGGBB"` string and deserializes from either
/// `"#RRGGBB"` (opaque) or `"#AARRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Rgb {
    /// Opaque color from red, green, and blue bytes.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Builds a color from integer channels, saturating each into [0, 255].
    pub fn from_argb_clamped(a: i32, r: i32, g: i32, b: i32) -> Self {
        Self {
            a: clamp_byte(a),
            r: clamp_byte(r),
            g: clamp_byte(g),
            b: clamp_byte(b),
        }
    }

    /// Same color with alpha forced to 255.
    pub fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Formats as uppercase hex without a `#`: `AARRGGBB` when `include_alpha`
    /// is set, `RRGGBB` otherwise.
    pub fn to_hex(self, include_alpha: bool) -> String {
        if include_alpha {
            format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// Parses hex text of exactly 8 (`AARRGGBB`) or 6 (`RRGGBB`) digits,
    /// depending on `include_alpha`. A leading `#` is optional and case is
    /// ignored. Six-digit input yields an opaque color.
    pub fn from_hex(text: &str, include_alpha: bool) -> Result<Self, ColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let expected = if include_alpha { 8 } else { 6 };
        if digits.len() != expected {
            return Err(ColorError::InvalidHex(format!(
                "expected {expected} hex digits, got {:?}",
                text
            )));
        }
        Self::parse_digits(digits)
    }

    /// Parses either a 6- or 8-digit hex string.
    pub fn parse_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        match digits.len() {
            6 | 8 => Self::parse_digits(digits),
            n => Err(ColorError::InvalidHex(format!(
                "expected 6 or 8 hex digits, got {n} in {text:?}"
            ))),
        }
    }

    fn parse_digits(digits: &str) -> Result<Self, ColorError> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(format!(
                "{digits:?} contains non-hex characters"
            )));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorError::InvalidHex(format!("{digits:?}: {e}")))
        };
        match digits.len() {
            8 => Ok(Self::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?)),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{}", self.to_hex(true)))
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn one() -> f64 {
    1.0
}

/// Hue / saturation / luminance with an alpha channel, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "HslFields")]
pub struct Hsl {
    a: f64,
    h: f64,
    s: f64,
    l: f64,
}

#[derive(Deserialize)]
struct HslFields {
    #[serde(default = "one")]
    a: f64,
    h: f64,
    s: f64,
    l: f64,
}

impl From<HslFields> for Hsl {
    fn from(f: HslFields) -> Self {
        Hsl::with_alpha(f.h, f.s, f.l, f.a)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self {
            a: 1.0,
            h: 0.0,
            s: 0.0,
            l: 0.0,
        }
    }
}

impl Hsl {
    /// Opaque HSL value; every channel is clamped into [0, 1].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self::with_alpha(h, s, l, 1.0)
    }

    pub fn with_alpha(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            h: clamp_unit(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn s(&self) -> f64 {
        self.s
    }
    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn with_a(self, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }
    pub fn with_h(self, h: f64) -> Self {
        Self {
            h: clamp_unit(h),
            ..self
        }
    }
    pub fn with_s(self, s: f64) -> Self {
        Self {
            s: clamp_unit(s),
            ..self
        }
    }
    pub fn with_l(self, l: f64) -> Self {
        Self {
            l: clamp_unit(l),
            ..self
        }
    }
}

/// Cyan / magenta / yellow / key (black) with an alpha channel, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CmykFields")]
pub struct Cmyk {
    a: f64,
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

#[derive(Deserialize)]
struct CmykFields {
    #[serde(default = "one")]
    a: f64,
    c: f64,
    m: f64,
    y: f64,
    #[serde(default)]
    k: f64,
}

impl From<CmykFields> for Cmyk {
    fn from(f: CmykFields) -> Self {
        Cmyk::with_alpha(f.c, f.m, f.y, f.k, f.a)
    }
}

impl Default for Cmyk {
    fn default() -> Self {
        Self {
            a: 1.0,
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 0.0,
        }
    }
}

impl Cmyk {
    /// Opaque CMYK value; every channel is clamped into [0, 1].
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::with_alpha(c, m, y, k, 1.0)
    }

    pub fn with_alpha(c: f64, m: f64, y: f64, k: f64, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            c: clamp_unit(c),
            m: clamp_unit(m),
            y: clamp_unit(y),
            k: clamp_unit(k),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn c(&self) -> f64 {
        self.c
    }
    pub fn m(&self) -> f64 {
        self.m
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn with_a(self, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }
    pub fn with_c(self, c: f64) -> Self {
        Self {
            c: clamp_unit(c),
            ..self
        }
    }
    pub fn with_m(self, m: f64) -> Self {
        Self {
            m: clamp_unit(m),
            ..self
        }
    }
    pub fn with_y(self, y: f64) -> Self {
        Self {
            y: clamp_unit(y),
            ..self
        }
    }
    pub fn with_k(self, k: f64) -> Self {
        Self {
            k: clamp_unit(k),
            ..self
        }
    }
}
