//! Toolkit-independent state of the color picker dialog.
//!
//! [`ColorModel`] holds the current (primary) color and the color the picker
//! was opened with (secondary), and keeps the RGB, HSL, and CMYK views in
//! sync as the user types into channel fields or the hex box.
//!
//! Which representation is authoritative depends on what was edited:
//! - HSL edits keep the edited HSL and derive RGB, then CMYK from RGB. Hue
//!   therefore survives on grays, where RGB alone would lose it.
//! - RGB and alpha edits derive both HSL and CMYK from RGB.
//! - CMYK edits keep the edited CMYK (including K) and derive RGB, then HSL.
//!
//! With alpha disabled every view stays opaque, whatever alpha the incoming
//! value carries.

use crate::color::{Cmyk, Hsl, Rgb};
use crate::convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::error::ColorError;
use crate::rounding::round_to_int;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One editable text field of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Hue,
    Saturation,
    Brightness,
    Red,
    Green,
    Blue,
    Alpha,
    Cyan,
    Magenta,
    Yellow,
    Key,
}

impl Channel {
    pub const ALL: [Channel; 11] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Brightness,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Alpha,
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Key,
    ];

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Hue",
            Channel::Saturation => "Saturation",
            Channel::Brightness => "Brightness",
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
            Channel::Cyan => "Cyan",
            Channel::Magenta => "Magenta",
            Channel::Yellow => "Yellow",
            Channel::Key => "Key",
        }
    }

    /// Largest value the text field accepts: degrees for hue, bytes for RGB
    /// and alpha, percent for everything else.
    pub fn max(self) -> u32 {
        match self {
            Channel::Hue => 360,
            Channel::Red | Channel::Green | Channel::Blue | Channel::Alpha => 255,
            _ => 100,
        }
    }

    /// Looks a channel up by name, case-insensitively. Accepts the full
    /// label or the single-letter field names (`h s b r g b a c m y k`,
    /// where `b` means brightness; use `blue` for blue).
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        let lower = name.trim().to_ascii_lowercase();
        let channel = match lower.as_str() {
            "hue" | "h" => Channel::Hue,
            "saturation" | "sat" | "s" => Channel::Saturation,
            "brightness" | "bright" | "luminance" | "l" | "b" => Channel::Brightness,
            "red" | "r" => Channel::Red,
            "green" | "g" => Channel::Green,
            "blue" => Channel::Blue,
            "alpha" | "a" => Channel::Alpha,
            "cyan" | "c" => Channel::Cyan,
            "magenta" | "m" => Channel::Magenta,
            "yellow" | "y" => Channel::Yellow,
            "key" | "black" | "k" => Channel::Key,
            _ => return Err(ColorError::UnknownChannel(name.to_string())),
        };
        Ok(channel)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The text values the picker displays for its current color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    pub hue: i32,
    pub saturation: i32,
    pub brightness: i32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub cyan: i32,
    pub magenta: i32,
    pub yellow: i32,
    pub key: i32,
    pub hex: String,
}

impl Readout {
    /// Returns the displayed number for `channel`.
    pub fn value(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Brightness => self.brightness,
            Channel::Red => self.red as i32,
            Channel::Green => self.green as i32,
            Channel::Blue => self.blue as i32,
            Channel::Alpha => self.alpha as i32,
            Channel::Cyan => self.cyan,
            Channel::Magenta => self.magenta,
            Channel::Yellow => self.yellow,
            Channel::Key => self.key,
        }
    }
}

/// Synchronized RGB / HSL / CMYK state behind the color picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    primary: Rgb,
    secondary: Rgb,
    hsl: Hsl,
    cmyk: Cmyk,
    enable_alpha: bool,
}

impl ColorModel {
    /// Opens the picker on `start`. With alpha disabled the color is made
    /// opaque first.
    pub fn new(start: Rgb, enable_alpha: bool) -> Self {
        let start = if enable_alpha { start } else { start.opaque() };
        Self {
            primary: start,
            secondary: start,
            hsl: rgb_to_hsl(start),
            cmyk: rgb_to_cmyk(start),
            enable_alpha,
        }
    }

    pub fn primary(&self) -> Rgb {
        self.primary
    }

    /// The color the picker was opened with.
    pub fn secondary(&self) -> Rgb {
        self.secondary
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    pub fn enable_alpha(&self) -> bool {
        self.enable_alpha
    }

    /// Replaces the current color, e.g. from an eyedropper or swatch.
    pub fn set_primary(&mut self, rgb: Rgb) {
        self.sync_from_rgb(rgb);
    }

    /// Replaces the HSL state directly, as the 2D box and slider do.
    pub fn set_hsl(&mut self, hsl: Hsl) {
        self.sync_from_hsl(hsl);
    }

    /// Replaces the CMYK state directly, keeping its K.
    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.sync_from_cmyk(cmyk);
    }

    /// Applies the text typed into `channel`'s field.
    ///
    /// The text must be non-empty ASCII digits. Values above the channel's
    /// maximum saturate to it. On error the model is left untouched. With
    /// alpha disabled the alpha field is hidden, so alpha edits are ignored.
    pub fn edit(&mut self, channel: Channel, text: &str) -> Result<(), ColorError> {
        let value = parse_field(channel, text).inspect_err(|e| log::warn!("{e}"))?;
        let max = channel.max();
        let unit = value as f64 / max as f64;
        let byte = value as u8;

        if channel == Channel::Alpha && !self.enable_alpha {
            log::debug!("ignoring alpha edit, alpha is disabled");
            return Ok(());
        }

        log::debug!("edit {channel} = {value}");
        match channel {
            Channel::Hue => self.sync_from_hsl(self.hsl.with_h(unit)),
            Channel::Saturation => self.sync_from_hsl(self.hsl.with_s(unit)),
            Channel::Brightness => self.sync_from_hsl(self.hsl.with_l(unit)),
            Channel::Red => self.sync_from_rgb(Rgb { r: byte, ..self.primary }),
            Channel::Green => self.sync_from_rgb(Rgb { g: byte, ..self.primary }),
            Channel::Blue => self.sync_from_rgb(Rgb { b: byte, ..self.primary }),
            Channel::Alpha => self.sync_from_rgb(self.primary.with_alpha(byte)),
            Channel::Cyan => self.sync_from_cmyk(self.cmyk.with_c(unit)),
            Channel::Magenta => self.sync_from_cmyk(self.cmyk.with_m(unit)),
            Channel::Yellow => self.sync_from_cmyk(self.cmyk.with_y(unit)),
            Channel::Key => self.sync_from_cmyk(self.cmyk.with_k(unit)),
        }
        Ok(())
    }

    /// Applies the text typed into the hex box: `AARRGGBB` with alpha
    /// enabled, `RRGGBB` otherwise. On error the model is left untouched.
    pub fn edit_hex(&mut self, text: &str) -> Result<(), ColorError> {
        let upper = text.trim().to_ascii_uppercase();
        if upper.is_empty() || !upper.chars().all(|c| c.is_ascii_hexdigit()) {
            let err = ColorError::InvalidHex(format!(
                "hex must be a value between 00000000 and FFFFFFFF, got {text:?}"
            ));
            log::warn!("{err}");
            return Err(err);
        }
        let rgb = Rgb::from_hex(&upper, self.enable_alpha).inspect_err(|e| log::warn!("{e}"))?;
        log::debug!("edit hex = {upper}");
        self.sync_from_rgb(rgb);
        Ok(())
    }

    /// Returns to the starting color's RGB, keeping the current alpha.
    pub fn revert(&mut self) {
        let rgb = self.secondary.with_alpha(self.primary.a);
        log::debug!("revert to {rgb:?}");
        self.sync_from_rgb(rgb);
    }

    /// The numbers and hex string the picker shows for the current state.
    pub fn readout(&self) -> Readout {
        Readout {
            hue: round_to_int(self.hsl.h() * 360.0),
            saturation: round_to_int(self.hsl.s() * 100.0),
            brightness: round_to_int(self.hsl.l() * 100.0),
            red: self.primary.r,
            green: self.primary.g,
            blue: self.primary.b,
            alpha: self.primary.a,
            cyan: round_to_int(self.cmyk.c() * 100.0),
            magenta: round_to_int(self.cmyk.m() * 100.0),
            yellow: round_to_int(self.cmyk.y() * 100.0),
            key: round_to_int(self.cmyk.k() * 100.0),
            hex: self.primary.to_hex(self.enable_alpha),
        }
    }

    fn sync_from_rgb(&mut self, rgb: Rgb) {
        self.primary = if self.enable_alpha { rgb } else { rgb.opaque() };
        self.hsl = rgb_to_hsl(self.primary);
        self.cmyk = rgb_to_cmyk(self.primary);
    }

    fn sync_from_hsl(&mut self, hsl: Hsl) {
        self.hsl = if self.enable_alpha { hsl } else { hsl.with_a(1.0) };
        self.primary = hsl_to_rgb(self.hsl);
        self.cmyk = rgb_to_cmyk(self.primary);
    }

    fn sync_from_cmyk(&mut self, cmyk: Cmyk) {
        self.cmyk = if self.enable_alpha { cmyk } else { cmyk.with_a(1.0) };
        self.primary = cmyk_to_rgb(self.cmyk);
        self.hsl = rgb_to_hsl(self.primary);
    }
}

/// Validates field text and saturates it at the channel maximum.
fn parse_field(channel: Channel, text: &str) -> Result<u32, ColorError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ColorError::InvalidChannelText { channel });
    }
    // All digits, so the only possible parse failure is overflow.
    let value = text.parse::<u32>().unwrap_or(u32::MAX);
    Ok(value.min(channel.max()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_model() -> ColorModel {
        ColorModel::new(Rgb::new(255, 0, 0), false)
    }

    // -- Channel --

    #[test]
    fn channel_max_matches_field_ranges() {
        assert_eq!(Channel::Hue.max(), 360);
        assert_eq!(Channel::Red.max(), 255);
        assert_eq!(Channel::Alpha.max(), 255);
        assert_eq!(Channel::Saturation.max(), 100);
        assert_eq!(Channel::Key.max(), 100);
    }

    #[test]
    fn from_name_accepts_labels_and_short_names() {
        for ch in Channel::ALL {
            assert_eq!(Channel::from_name(ch.label()).unwrap(), ch);
        }
        assert_eq!(Channel::from_name("H").unwrap(), Channel::Hue);
        assert_eq!(Channel::from_name("b").unwrap(), Channel::Brightness);
        assert_eq!(Channel::from_name("k").unwrap(), Channel::Key);
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            Channel::from_name("teal"),
            Err(ColorError::UnknownChannel(_))
        ));
    }

    // -- Construction and readout --

    #[test]
    fn new_without_alpha_makes_start_opaque() {
        let model = ColorModel::new(Rgb::from_argb(10, 1, 2, 3), false);
        assert_eq!(model.primary().a, 255);
        assert_eq!(model.secondary().a, 255);
    }

    #[test]
    fn new_with_alpha_keeps_start_alpha() {
        let model = ColorModel::new(Rgb::from_argb(10, 1, 2, 3), true);
        assert_eq!(model.primary().a, 10);
        assert_eq!(model.readout().hex, "0A010203");
    }

    #[test]
    fn readout_of_pure_red() {
        let r = red_model().readout();
        assert_eq!((r.hue, r.saturation, r.brightness), (0, 100, 100));
        assert_eq!((r.red, r.green, r.blue, r.alpha), (255, 0, 0, 255));
        assert_eq!((r.cyan, r.magenta, r.yellow, r.key), (0, 100, 100, 0));
        assert_eq!(r.hex, "FF0000");
    }

    #[test]
    fn readout_value_matches_fields() {
        let r = ColorModel::new(Rgb::new(100, 150, 200), false).readout();
        assert_eq!(r.value(Channel::Red), 100);
        assert_eq!(r.value(Channel::Blue), 200);
        assert_eq!(r.value(Channel::Key), r.key);
        assert_eq!(r.value(Channel::Hue), r.hue);
    }

    // -- Channel edits --

    #[test]
    fn hue_edit_recomputes_rgb_and_cmyk() {
        let mut model = red_model();
        model.edit(Channel::Hue, "240").unwrap();
        assert_eq!(model.primary(), Rgb::new(0, 0, 255));
        let r = model.readout();
        assert_eq!(r.hue, 240);
        assert_eq!((r.cyan, r.magenta, r.yellow), (100, 100, 0));
    }

    #[test]
    fn hue_survives_on_gray_after_hsl_edit() {
        let mut model = red_model();
        model.edit(Channel::Hue, "120").unwrap();
        model.edit(Channel::Saturation, "0").unwrap();
        assert_eq!(model.primary(), Rgb::new(255, 255, 255));
        // HSL stays authoritative, so the hue field still reads 120.
        assert_eq!(model.readout().hue, 120);
        model.edit(Channel::Saturation, "100").unwrap();
        assert_eq!(model.primary(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn rgb_edit_recomputes_hsl() {
        let mut model = red_model();
        model.edit(Channel::Green, "255").unwrap();
        assert_eq!(model.primary(), Rgb::new(255, 255, 0));
        assert_eq!(model.readout().hue, 60);
    }

    #[test]
    fn rgb_edit_to_gray_loses_hue() {
        let mut model = red_model();
        model.edit(Channel::Green, "255").unwrap();
        model.edit(Channel::Blue, "255").unwrap();
        assert_eq!(model.readout().hue, 0);
        assert_eq!(model.readout().saturation, 0);
    }

    #[test]
    fn alpha_edit_sets_byte() {
        let mut model = ColorModel::new(Rgb::new(1, 2, 3), true);
        model.edit(Channel::Alpha, "128").unwrap();
        assert_eq!(model.primary(), Rgb::from_argb(128, 1, 2, 3));
        assert_eq!(model.readout().hex, "80010203");
    }

    #[test]
    fn cmyk_edit_keeps_key_but_rgb_ignores_it() {
        let mut model = ColorModel::new(Rgb::new(255, 255, 255), false);
        model.edit(Channel::Key, "100").unwrap();
        assert_eq!(model.readout().key, 100);
        assert_eq!(model.primary(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn cyan_edit_recomputes_rgb_and_hsl() {
        let mut model = ColorModel::new(Rgb::new(255, 255, 255), false);
        model.edit(Channel::Cyan, "100").unwrap();
        assert_eq!(model.primary(), Rgb::new(0, 255, 255));
        assert_eq!(model.readout().hue, 180);
    }

    #[test]
    fn values_above_max_saturate() {
        let mut model = red_model();
        model.edit(Channel::Hue, "400").unwrap();
        assert_eq!(model.readout().hue, 360);
        model.edit(Channel::Red, "999").unwrap();
        assert_eq!(model.primary().r, 255);
        model.edit(Channel::Saturation, "99999999999999999999").unwrap();
        assert_eq!(model.readout().saturation, 100);
    }

    #[test]
    fn invalid_text_is_rejected_and_model_unchanged() {
        let mut model = red_model();
        let before = model.clone();
        for text in ["", "-5", "12a", "1.5", " 10"] {
            let err = model.edit(Channel::Hue, text).unwrap_err();
            assert_eq!(err.to_string(), "Hue must be a number between 0 and 360");
        }
        assert_eq!(model, before);
    }

    // -- Hex and revert --

    #[test]
    fn hex_edit_without_alpha() {
        let mut model = red_model();
        model.edit_hex("00ff00").unwrap();
        assert_eq!(model.primary(), Rgb::new(0, 255, 0));
        assert_eq!(model.readout().hex, "00FF00");
        assert_eq!(model.readout().hue, 120);
    }

    #[test]
    fn hex_edit_with_alpha_requires_eight_digits() {
        let mut model = ColorModel::new(Rgb::new(0, 0, 0), true);
        assert!(model.edit_hex("00FF00").is_err());
        model.edit_hex("7F00FF00").unwrap();
        assert_eq!(model.primary(), Rgb::from_argb(0x7F, 0, 255, 0));
    }

    #[test]
    fn hex_edit_rejects_illegal_characters() {
        let mut model = red_model();
        let before = model.clone();
        assert!(matches!(model.edit_hex("XYZ123"), Err(ColorError::InvalidHex(_))));
        assert!(model.edit_hex("").is_err());
        assert!(model.edit_hex("#FF0000").is_err());
        assert_eq!(model, before);
    }

    #[test]
    fn revert_restores_start_rgb_keeping_alpha() {
        let mut model = ColorModel::new(Rgb::new(10, 20, 30), true);
        model.edit(Channel::Alpha, "40").unwrap();
        model.edit(Channel::Red, "200").unwrap();
        model.revert();
        assert_eq!(model.primary(), Rgb::from_argb(40, 10, 20, 30));
    }

    #[test]
    fn set_hsl_drives_all_views() {
        let mut model = red_model();
        model.set_hsl(Hsl::new(0.5, 1.0, 1.0));
        assert_eq!(model.primary(), Rgb::new(0, 255, 255));
        assert_eq!(model.readout().cyan, 100);
    }

    #[test]
    fn set_cmyk_keeps_key() {
        let mut model = red_model();
        model.set_cmyk(Cmyk::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(model.primary(), Rgb::new(255, 255, 255));
        assert_eq!(model.readout().key, 50);
    }

    #[test]
    fn set_hsl_and_set_cmyk_stay_opaque_without_alpha() {
        let mut model = red_model();
        model.set_hsl(Hsl::with_alpha(0.5, 1.0, 1.0, 0.5));
        assert_eq!(model.primary(), Rgb::new(0, 255, 255));
        assert_eq!(model.hsl().a(), 1.0);
        assert_eq!(model.cmyk().a(), 1.0);

        model.set_cmyk(Cmyk::with_alpha(0.0, 1.0, 1.0, 0.0, 0.25));
        assert_eq!(model.primary(), Rgb::new(255, 0, 0));
        assert_eq!(model.cmyk().a(), 1.0);
        assert_eq!(model.hsl().a(), 1.0);

        model.set_primary(Rgb::from_argb(10, 1, 2, 3));
        assert_eq!(model.primary(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn set_hsl_keeps_alpha_when_enabled() {
        let mut model = ColorModel::new(Rgb::new(255, 0, 0), true);
        model.set_hsl(Hsl::with_alpha(0.5, 1.0, 1.0, 0.5));
        assert_eq!(model.primary(), Rgb::from_argb(128, 0, 255, 255));
    }

    #[test]
    fn alpha_edit_is_ignored_without_alpha() {
        let mut model = red_model();
        model.edit(Channel::Alpha, "0").unwrap();
        assert_eq!(model.primary(), Rgb::new(255, 0, 0));
        assert_eq!(model.readout().alpha, 255);
        // Bad text is still rejected.
        assert!(model.edit(Channel::Alpha, "x").is_err());
    }

    #[test]
    fn readout_serializes_to_json() {
        let v = serde_json::to_value(red_model().readout()).unwrap();
        assert_eq!(v["hex"], "FF0000");
        assert_eq!(v["hue"], 0);
        assert_eq!(v["key"], 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_digit_text_is_accepted(ch_idx in 0usize..11, digits in "[0-9]{1,12}") {
                let channel = Channel::ALL[ch_idx];
                let mut model = red_model();
                prop_assert!(model.edit(channel, &digits).is_ok());
                let v = model.readout().value(channel);
                prop_assert!(v >= 0, "{channel} read back {v}");
            }

            #[test]
            fn non_digit_text_never_changes_state(
                ch_idx in 0usize..11,
                text in "[0-9]*[^0-9][0-9a-z]*",
            ) {
                let channel = Channel::ALL[ch_idx];
                let mut model = red_model();
                let before = model.clone();
                prop_assert!(model.edit(channel, &text).is_err());
                prop_assert_eq!(model, before);
            }
        }
    }
}
