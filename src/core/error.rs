/// Error Module
///
/// This module defines the structured error value surfaced when a statement
/// fails at any stage (prepare, bind, step). The code and message are the
/// engine's own diagnostics, not a reclassification of them.
use serde::Serialize;
use thiserror::Error;

/// A normalized SQLite failure: the engine-native result code paired with
/// the engine-native diagnostic text.
///
/// `code` is the extended result code reported by the engine for the most
/// recent failed operation (the base code is `code & 0xff`). `message` is
/// the matching human-readable diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("sqlite error {code}: {message}")]
pub struct ExecutionError {
    /// Engine-native result code (e.g. 1 for SQLITE_ERROR, 25 for SQLITE_RANGE).
    pub code: i32,
    /// Engine-native diagnostic message for the failure.
    pub message: String,
}

impl ExecutionError {
    /// Creates an error from an explicit code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        ExecutionError {
            code,
            message: message.into(),
        }
    }
}

/// Converts a rusqlite-level error into an `ExecutionError`.
///
/// Engine-backed failures carry their extended code and message directly;
/// library-level failures that never reached the engine are mapped to the
/// generic SQLITE_ERROR code with their display text.
impl From<rusqlite::Error> for ExecutionError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) => ExecutionError {
                code: e.extended_code,
                message: msg.unwrap_or_else(|| e.to_string()),
            },
            other => ExecutionError {
                code: rusqlite::ffi::SQLITE_ERROR,
                message: other.to_string(),
            },
        }
    }
}

/// Type alias for Result to use ExecutionError as the error type.
///
/// This provides a consistent error type across the crate instead of
/// mixing `rusqlite::Result` with caller-facing signatures.
pub type Result<T> = std::result::Result<T, ExecutionError>;
