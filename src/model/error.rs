//! Error types for rmdex.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all startup and terminal failures
//!   - [`FetchError`] - Request or parse failure while assembling the character list
//!   - [`ConfigError`] - Config file that exists but cannot be read or parsed
//!   - [`LoggingError`] - Log file setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the page loop stops, logs the failure and the
//! browser proceeds with whatever records were collected (possibly none). The
//! only fatal fetch error is failing to build the HTTP client at all.
//! Config, logging and terminal errors are fatal and propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// HTTP client could not be constructed.
    ///
    /// Failures of individual page requests never reach this variant; they
    /// are absorbed by the page loop.
    #[error("Fetch setup failed: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the browser cannot function; the shell
    /// restores the terminal and exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure while fetching or parsing one page of the character collection.
///
/// This is the only domain error kind. It is caught at the page loop
/// boundary and converted into "proceed with partial data".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built (TLS backend, user agent, ...).
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP GET error for '{url}': {source}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP GET failed for '{url}': status {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// The body was not a valid page of characters.
    #[error("Invalid page payload from '{url}': {source}")]
    Parse {
        /// URL that was requested.
        url: String,
        /// JSON error with line/column.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL the failure relates to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Client(_) => None,
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Parse { url, .. } => Some(url),
        }
    }
}
