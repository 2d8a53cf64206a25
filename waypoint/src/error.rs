//! Error types for the waypoint library.
//!
//! The navigation core itself is total: every operation accepts any string
//! input and cannot fail. The error surface here covers the ambient
//! concerns around it (configuration files, log-level parsing), using
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a waypoint error.
///
/// # Examples
///
/// ```
/// use waypoint::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the waypoint library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unrecognized log level string was provided.
    #[error("invalid log level: {value}")]
    InvalidLogLevel {
        /// The unrecognized value.
        value: String,
    },
}
