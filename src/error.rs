/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the TestRail client
//!
//! The variants follow how a failure should be handled by the caller:
//!
//! - [`AppError::Config`] is raised while building a session and is never
//!   suppressed.
//! - [`AppError::StatusCode`] is a not-ok HTTP response. Sessions built with
//!   `exc(true)` return `Ok(None)` instead.
//! - [`AppError::Network`] is a transport failure. It is retried only when the
//!   session's retry predicate accepts it.

use thiserror::Error;

/// Result alias used across the crate
pub type TestRailResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// A required credential is missing after the environment fallback
    #[error("configuration error: no {field} value set")]
    Config {
        /// Name of the missing field (`url`, `email` or `password`)
        field: &'static str,
    },

    /// The server answered with a status outside 2xx/3xx
    #[error("status code error: {status} {reason} for url {url}: {body}")]
    StatusCode {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
        /// Requested URL
        url: String,
        /// Response body as text
        body: String,
    },

    /// Transport failure (connect, DNS, timeout, TLS...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file failure while uploading or downloading attachments
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Arguments that cannot be turned into a request
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// HTTP status carried by a [`AppError::StatusCode`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::StatusCode { status, .. } => Some(*status),
            AppError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is a rejected request (4xx/5xx) rather than a local failure
    pub fn is_status_code(&self) -> bool {
        matches!(self, AppError::StatusCode { .. })
    }
}
