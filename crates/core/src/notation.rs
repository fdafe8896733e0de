//! Text notation for colors in any of the three models.
//!
//! Accepted forms (whitespace around components is ignored):
//! - `#RRGGBB`, `#AARRGGBB`, or the same without `#`
//! - `rgb:r,g,b[,a]` with bytes 0-255
//! - `hsl:h,s,l[,a]` with normalized floats, clamped into [0, 1]
//! - `cmyk:c,m,y,k[,a]` with normalized floats, clamped into [0, 1]

use crate::color::{Cmyk, Hsl, Rgb};
use crate::convert::{cmyk_to_rgb, hsl_to_rgb};
use crate::error::ColorError;
use std::str::FromStr;

/// A parsed color in the model it was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorNotation {
    Rgb(Rgb),
    Hsl(Hsl),
    Cmyk(Cmyk),
}

impl ColorNotation {
    /// Converts to RGB through the matching converter.
    pub fn to_rgb(self) -> Rgb {
        match self {
            ColorNotation::Rgb(c) => c,
            ColorNotation::Hsl(c) => hsl_to_rgb(c),
            ColorNotation::Cmyk(c) => cmyk_to_rgb(c),
        }
    }
}

impl FromStr for ColorNotation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((model, body)) = s.split_once(':') else {
            return Rgb::parse_hex(s)
                .map(ColorNotation::Rgb)
                .map_err(|e| ColorError::InvalidNotation(format!("{s}: {e}")));
        };

        match model.trim().to_ascii_lowercase().as_str() {
            "rgb" => {
                let v = components::<u8>(s, body, 3)?;
                let a = v.get(3).copied().unwrap_or(255);
                Ok(ColorNotation::Rgb(Rgb::from_argb(a, v[0], v[1], v[2])))
            }
            "hsl" => {
                let v = components::<f64>(s, body, 3)?;
                let a = v.get(3).copied().unwrap_or(1.0);
                Ok(ColorNotation::Hsl(Hsl::with_alpha(v[0], v[1], v[2], a)))
            }
            "cmyk" => {
                let v = components::<f64>(s, body, 4)?;
                let a = v.get(4).copied().unwrap_or(1.0);
                Ok(ColorNotation::Cmyk(Cmyk::with_alpha(v[0], v[1], v[2], v[3], a)))
            }
            other => Err(ColorError::InvalidNotation(format!(
                "{s}: unknown color model {other:?} (expected rgb, hsl, or cmyk)"
            ))),
        }
    }
}

/// Splits `body` on commas and parses `base` or `base + 1` (with alpha)
/// components.
fn components<T>(full: &str, body: &str, base: usize) -> Result<Vec<T>, ColorError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let values = body
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<T>()
                .map_err(|e| ColorError::InvalidNotation(format!("{full}: {part:?}: {e}")))
        })
        .collect::<Result<Vec<T>, ColorError>>()?;
    if values.len() != base && values.len() != base + 1 {
        return Err(ColorError::InvalidNotation(format!(
            "{full}: expected {base} or {} components, got {}",
            base + 1,
            values.len()
        )));
    }
    Ok(values)
}
