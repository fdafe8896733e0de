#![deny(unsafe_code)]
//! Core types for swatch: RGB/HSL/CMYK color values and the conversions
//! between them.
//!
//! Provides the value types (`Rgb`, `Hsl`, `Cmyk`), pure conversion
//! functions, brightness/saturation/hue operators and `Recipe` chains of
//! them, the picker's custom integer rounding, the `ColorModel` that keeps a
//! color picker's fields in sync, and a text notation for colors.

pub mod adjust;
pub mod color;
pub mod convert;
pub mod error;
pub mod notation;
pub mod picker;
pub mod recipe;
pub mod rounding;

pub use adjust::Adjustment;
pub use color::{Cmyk, Hsl, Rgb};
pub use convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
pub use error::ColorError;
pub use notation::ColorNotation;
pub use picker::{Channel, ColorModel, Readout};
pub use recipe::Recipe;
pub use rounding::round_to_int;
