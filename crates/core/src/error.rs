//! Error types for swatch-core.
//!
//! Conversions and adjustments are total and never fail. Only text input
//! (hex strings, picker channel text, color notation, names) can be rejected.

use crate::picker::Channel;
use thiserror::Error;

/// Errors produced while parsing color text.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string had bad digits or the wrong length.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Picker channel text was empty or not made of digits.
    #[error("{} must be a number between 0 and {}", .channel.label(), .channel.max())]
    InvalidChannelText { channel: Channel },

    /// A channel name was not recognized.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// An adjustment operator name was not recognized.
    #[error("unknown adjustment: {0}")]
    UnknownAdjustment(String),

    /// A color notation string (`rgb:`, `hsl:`, `cmyk:`, hex) could not be parsed.
    #[error("invalid color notation: {0}")]
    InvalidNotation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_message() {
        let err = ColorError::InvalidHex("GG0000".into());
        let msg = format!("{err}");
        assert!(msg.contains("GG0000"), "missing input in: {msg}");
    }

    #[test]
    fn invalid_channel_text_reads_like_picker_prompt() {
        let err = ColorError::InvalidChannelText {
            channel: Channel::Hue,
        };
        assert_eq!(err.to_string(), "Hue must be a number between 0 and 360");

        let err = ColorError::InvalidChannelText {
            channel: Channel::Key,
        };
        assert_eq!(err.to_string(), "Key must be a number between 0 and 100");
    }

    #[test]
    fn unknown_channel_includes_name() {
        let err = ColorError::UnknownChannel("teal".into());
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn unknown_adjustment_includes_name() {
        let err = ColorError::UnknownAdjustment("sharpen".into());
        assert!(err.to_string().contains("sharpen"));
    }

    #[test]
    fn invalid_notation_includes_message() {
        let err = ColorError::InvalidNotation("lab:1,2,3".into());
        assert!(err.to_string().contains("lab:1,2,3"));
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
