//! Error types for sortviz.
//!
//! All fallible operations return `Result<T, SortError>` instead of panicking.
//! A cooperative stop is not an error: it yields a partially sorted array
//! through [`crate::engine::RunOutcome`].

use thiserror::Error;

/// Result type alias for sortviz operations.
pub type SortResult<T> = Result<T, SortError>;

/// Unified error type for all sortviz operations.
#[derive(Debug, Error)]
pub enum SortError {
    // ===== Run Selection Errors =====
    /// No implementation (real or placeholder) matches the requested name.
    #[error("Unsupported algorithm '{name}' (expected one of: {expected})")]
    UnsupportedAlgorithm {
        /// The identifier that failed to resolve.
        name: String,
        /// Comma-separated list of accepted identifiers.
        expected: String,
    },

    /// Unknown data pattern name.
    #[error("Unknown data pattern '{0}' (expected random, sorted, reverse, nearly or duplicates)")]
    UnknownPattern(String),

    /// A value supplied on the command line could not be parsed.
    #[error("Invalid value '{value}': {reason}")]
    InvalidValue {
        /// The raw input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SortError {
    /// Create an unsupported-algorithm error listing the accepted names.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            name: name.into(),
            expected: crate::algorithms::Algorithm::ALL
                .iter()
                .map(|a| a.id())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an invalid-value error.
    #[must_use]
    pub fn invalid_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Whether the error was caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm { .. }
                | Self::UnknownPattern(_)
                | Self::InvalidValue { .. }
                | Self::Config { .. }
                | Self::YamlParse(_)
                | Self::Validation(_)
        )
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
