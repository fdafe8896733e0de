//! Brightness, saturation, and hue operators.
//!
//! Each operator converts RGB -> HSL, assigns ("set") or multiplies
//! ("modify") one channel, and converts back. The HSL constructor clamps, so
//! a modify factor that pushes a channel past 1 simply saturates it.

use crate::color::Rgb;
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// All recognized adjustment names.
const ADJUSTMENT_NAMES: &[&str] = &[
    "set-brightness",
    "modify-brightness",
    "set-saturation",
    "modify-saturation",
    "set-hue",
    "modify-hue",
];

/// Imposes an absolute luminance level.
pub fn set_brightness(c: Rgb, brightness: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_l(brightness))
}

/// Scales luminance; factors below 1 darken, above 1 brighten.
pub fn modify_brightness(c: Rgb, factor: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_l(hsl.l() * factor))
}

/// Imposes an absolute saturation level in [0, 1].
pub fn set_saturation(c: Rgb, saturation: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_s(saturation))
}

/// Scales saturation.
pub fn modify_saturation(c: Rgb, factor: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_s(hsl.s() * factor))
}

/// Imposes an absolute hue in [0, 1] (1.0 is 360 degrees).
pub fn set_hue(c: Rgb, hue: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_h(hue))
}

/// Scales hue. Hue does not wrap: the result is clamped into [0, 1].
pub fn modify_hue(c: Rgb, factor: f64) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl.with_h(hsl.h() * factor))
}

/// A single named adjustment with its amount.
///
/// Serializes as `{"op": "modify-brightness", "amount": 1.2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Adjustment {
    SetBrightness { amount: f64 },
    ModifyBrightness { amount: f64 },
    SetSaturation { amount: f64 },
    ModifySaturation { amount: f64 },
    SetHue { amount: f64 },
    ModifyHue { amount: f64 },
}

impl Adjustment {
    /// Builds an adjustment from its kebab-case name.
    ///
    /// Returns `ColorError::UnknownAdjustment` if the name is not recognized.
    pub fn from_name(name: &str, amount: f64) -> Result<Self, ColorError> {
        match name {
            "set-brightness" => Ok(Adjustment::SetBrightness { amount }),
            "modify-brightness" => Ok(Adjustment::ModifyBrightness { amount }),
            "set-saturation" => Ok(Adjustment::SetSaturation { amount }),
            "modify-saturation" => Ok(Adjustment::ModifySaturation { amount }),
            "set-hue" => Ok(Adjustment::SetHue { amount }),
            "modify-hue" => Ok(Adjustment::ModifyHue { amount }),
            _ => Err(ColorError::UnknownAdjustment(name.to_string())),
        }
    }

    /// Returns a slice of all recognized adjustment names.
    pub fn list_names() -> &'static [&'static str] {
        ADJUSTMENT_NAMES
    }

    pub fn name(&self) -> &'static str {
        match self {
            Adjustment::SetBrightness { .. } => "set-brightness",
            Adjustment::ModifyBrightness { .. } => "modify-brightness",
            Adjustment::SetSaturation { .. } => "set-saturation",
            Adjustment::ModifySaturation { .. } => "modify-saturation",
            Adjustment::SetHue { .. } => "set-hue",
            Adjustment::ModifyHue { .. } => "modify-hue",
        }
    }

    pub fn apply(&self, c: Rgb) -> Rgb {
        match *self {
            Adjustment::SetBrightness { amount } => set_brightness(c, amount),
            Adjustment::ModifyBrightness { amount } => modify_brightness(c, amount),
            Adjustment::SetSaturation { amount } => set_saturation(c, amount),
            Adjustment::ModifySaturation { amount } => modify_saturation(c, amount),
            Adjustment::SetHue { amount } => set_hue(c, amount),
            Adjustment::ModifyHue { amount } => modify_hue(c, amount),
        }
    }
}
