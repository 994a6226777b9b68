//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: ramp error (unknown row)
//! - 11: I/O error (request file, image file)
//! - 12: input error (non-integer field, out-of-range field, bad color,
//!   malformed request file, too many rows)
//! - 13: serialization error
//! - 14: host capability error (clipboard, pixel sampling)

use std::fmt;
use value_ramp_core::RampError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A ramp-level error (row lookup).
    Ramp(RampError),
    /// An I/O error (reading a request or image file).
    Io(String),
    /// A user input error (unparseable or out-of-range field, bad hex).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// The clipboard or pixel sampler failed.
    Host(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Ramp(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Host(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Ramp(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<RampError> for CliError {
    fn from(e: RampError) -> Self {
        match e {
            RampError::Io(_) => CliError::Io(e.to_string()),
            RampError::InvalidInteger { .. }
            | RampError::OutOfRange { .. }
            | RampError::InvalidColor(_)
            | RampError::InvalidRequest(_) => CliError::Input(e.to_string()),
            RampError::Sample(_) | RampError::Clipboard(_) => CliError::Host(e.to_string()),
            other @ RampError::RowNotFound { .. } => CliError::Ramp(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
