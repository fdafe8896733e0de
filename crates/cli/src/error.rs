//! Failures of the `swatch` binary and the exit codes they map to.
//!
//! | code | cause |
//! |------|-------|
//! | 0    | success |
//! | 2    | clap rejected the arguments before `run` started |
//! | 10   | swatch-core refused some text: a color, a picker field, a channel or adjustment name |
//! | 11   | the `--recipe @path` file could not be read |
//! | 12   | the invocation was incomplete or malformed (`adjust` without `--op`, an edit without `=`, bad recipe JSON) |
//! | 13   | JSON output could not be produced |

use std::fmt;
use swatch_core::ColorError;

pub enum CliError {
    /// Rejected by swatch-core; the message is the picker's own prompt
    /// for field text.
    Color(ColorError),
    /// Reading the file behind `--recipe @path` failed.
    Io(String),
    /// Arguments that parse but do not describe a job, or recipe JSON that
    /// does not describe a `Recipe`.
    Input(String),
    /// Writing the `--json` output failed.
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => fmt::Display::fmt(e, f),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Color(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
