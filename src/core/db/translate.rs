/// Error Translation Module
///
/// This module reads the connection's most recent error state and packages
/// it as a structured `ExecutionError`. It is the single place the crate
/// touches the engine's diagnostic accessors.
use crate::core::error::ExecutionError;
use rusqlite::{ffi, Connection};
use std::ffi::CStr;

/// Translates the engine's per-connection error state into a structured value.
pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Reads the connection's current error code and message.
    ///
    /// This is a pure read of the diagnostics for the most recent failed
    /// operation on `conn`; it never fails itself. If the engine reports no
    /// error, the result carries the ok code (0) and the engine's default
    /// message. Callers should only invoke this after an operation has
    /// already signaled failure.
    pub fn from_connection(conn: &Connection) -> ExecutionError {
        // SAFETY: the raw handle is read-only borrowed for the two
        // diagnostic calls below and is never stored, stepped, or closed.
        unsafe {
            let db = conn.handle();
            let code = ffi::sqlite3_extended_errcode(db);
            let msg = ffi::sqlite3_errmsg(db);
            let message = if msg.is_null() {
                String::new()
            } else {
                CStr::from_ptr(msg).to_string_lossy().into_owned()
            };
            ExecutionError { code, message }
        }
    }
}
