//! Error types for value-ramp.

use thiserror::Error;

/// Errors produced while parsing ramp inputs or talking to host collaborators.
///
/// The conversion and ramp functions themselves never fail; every variant
/// here comes from input validation or from a host capability.
#[derive(Debug, Error)]
pub enum RampError {
    /// A form field did not contain an integer.
    #[error("invalid integer for {field}: '{input}'")]
    InvalidInteger { field: &'static str, input: String },

    /// A field parsed but fell outside the range allowed by the strict policy.
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A hex color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A serialized ramp request was malformed or had wrongly typed fields.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No row with the given 1-based index exists in the current ramp.
    #[error("row {index} not found (ramp has {len} rows)")]
    RowNotFound { index: usize, len: usize },

    /// The pixel sampler could not produce a color.
    #[error("pixel sample failed: {0}")]
    Sample(String),

    /// Writing to the clipboard failed.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// A file could not be read or decoded.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_integer_includes_field_and_input() {
        let err = RampError::InvalidInteger {
            field: "hue",
            input: "abc".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("hue"), "missing field in: {msg}");
        assert!(msg.contains("abc"), "missing input in: {msg}");
    }

    #[test]
    fn out_of_range_includes_bounds() {
        let err = RampError::OutOfRange {
            field: "saturation",
            value: 300,
            min: 0,
            max: 255,
        };
        let msg = format!("{err}");
        assert!(msg.contains("saturation"), "missing field in: {msg}");
        assert!(msg.contains("300"), "missing value in: {msg}");
        assert!(msg.contains("255"), "missing max in: {msg}");
    }

    #[test]
    fn row_not_found_includes_index_and_len() {
        let err = RampError::RowNotFound { index: 9, len: 8 };
        let msg = format!("{err}");
        assert!(msg.contains('9'), "missing index in: {msg}");
        assert!(msg.contains('8'), "missing len in: {msg}");
    }

    #[test]
    fn string_variants_include_message() {
        for err in [
            RampError::InvalidColor("bad hex".into()),
            RampError::InvalidRequest("bad hex".into()),
            RampError::Sample("bad hex".into()),
            RampError::Clipboard("bad hex".into()),
            RampError::Io("bad hex".into()),
        ] {
            let msg = err.to_string();
            assert!(msg.contains("bad hex"), "missing message in: {msg}");
        }
    }

    #[test]
    fn ramp_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RampError>();
    }

    #[test]
    fn ramp_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RampError>();
    }
}
