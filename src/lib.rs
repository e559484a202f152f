//! sqlstep: a minimal SQLite statement-execution adapter.
//!
//! Given an open connection, a parameterized SQL statement, and a sequence
//! of bind arguments, `sqlstep` prepares the statement, binds each argument
//! by runtime type, steps through the result rows, and decodes every column
//! into a generic [`Value`] by its runtime storage class. Failures at any
//! stage surface the engine's own error code and message as a single
//! structured [`ExecutionError`].
//!
//! Connection lifetime, schema setup, and transaction boundaries are owned
//! by the caller.

// Core infrastructure modules
pub mod core;

// Flat re-exports of the public surface
pub use crate::core::db::executor::{execute_statement_on_connection, StatementExecutor};
pub use crate::core::db::translate::ErrorTranslator;
pub use crate::core::db::value::{ResultSet, Row, Value};
pub use crate::core::error::{ExecutionError, Result};
