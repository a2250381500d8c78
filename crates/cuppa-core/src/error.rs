//! Error types for the Cuppa calculator.
//!
//! The calculation itself is total and never produces an error. These
//! variants cover the boundary where user-entered text becomes typed input.

use thiserror::Error;

/// A specialized Result type for Cuppa operations.
pub type CuppaResult<T> = Result<T, CuppaError>;

/// The main error type for Cuppa operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CuppaError {
    /// A numeric form field did not contain a parseable number.
    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidField {
        /// Label of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A frequency name did not match any of the fixed choices.
    #[error("Unknown {kind} frequency: '{value}'. Use one of: {expected}")]
    UnknownFrequency {
        /// Which picker the name was meant for ("deposit" or "compounding").
        kind: &'static str,
        /// The unrecognised name.
        value: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },
}

impl CuppaError {
    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Creates an unknown frequency error.
    #[must_use]
    pub fn unknown_frequency(
        kind: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::UnknownFrequency {
            kind,
            value: value.into(),
            expected,
        }
    }
}
