//! CLI error types.

use thiserror::Error;

use cuppa_core::CuppaError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Form input could not be turned into a calculation.
    #[error(transparent)]
    Input(#[from] CuppaError),

    /// Unknown preference key.
    #[error("Unknown configuration key: {0}. Run `cuppa config list` to see valid keys.")]
    UnknownConfigKey(String),

    /// Preference value rejected for its key.
    #[error("Invalid value for {key}: {value}. {hint}")]
    InvalidConfigValue {
        /// Key being set.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// What the key accepts.
        hint: &'static str,
    },

    /// No configuration directory could be determined.
    #[error("Could not determine config directory. Use --config or CUPPA_CONFIG.")]
    ConfigDir,

    /// The form was abandoned before it was complete.
    #[error("No input received.")]
    Cancelled,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
