/// Statement Execution Module
///
/// This module drives one SQL statement from text to materialized rows:
/// prepare, bind arguments by position, step to completion, decode every
/// column by its runtime storage class.
///
/// The prepared statement is scoped to a single `execute` call and is
/// finalized by drop on every return path, success or failure.
use crate::core::db::translate::ErrorTranslator;
use crate::core::db::value::{ResultSet, Row, Value};
use crate::core::error::{ExecutionError, Result};
use rusqlite::{ffi, Connection};
use tracing::debug;

/// Statement execution service that operates on a borrowed connection.
///
/// The connection is externally owned; the executor never opens, closes, or
/// reconfigures it. Execution is synchronous and single-threaded: callers
/// sharing one connection across threads must serialize access themselves.
pub struct StatementExecutor<'a> {
    connection: &'a Connection,
}

impl<'a> StatementExecutor<'a> {
    /// Creates a new StatementExecutor for the given connection.
    pub fn new(connection: &'a Connection) -> Self {
        StatementExecutor { connection }
    }

    /// Executes `sql` with `args` bound to its positional placeholders and
    /// materializes the full result.
    ///
    /// Arguments are bound by 1-based position in sequence order, with an
    /// exact type mapping (no coercion): Null, Integer, Real, Text, and
    /// Blob bind as their native SQLite counterparts, and the engine copies
    /// text/blob payloads. `args.len()` must equal the statement's
    /// placeholder count.
    ///
    /// Each decoded column's variant is chosen by the runtime storage class
    /// of the stored value, not by the column's declared type. Statements
    /// that produce no rows (INSERT/UPDATE/DELETE, or a SELECT matching
    /// nothing) return an empty `ResultSet`. Anything after the first
    /// statement terminator is ignored, per the engine's own parsing.
    ///
    /// # Errors
    ///
    /// Returns an `ExecutionError` carrying the engine's code and message
    /// if preparation, binding, or stepping fails. No partial result is
    /// ever returned.
    pub fn execute(&self, sql: &str, args: &[Value]) -> Result<ResultSet> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|_| ErrorTranslator::from_connection(self.connection))?;

        // Checked up front so a partially bound statement is never stepped.
        let expected = stmt.parameter_count();
        if args.len() != expected {
            return Err(ExecutionError::new(
                ffi::SQLITE_RANGE,
                format!(
                    "statement expects {} bound parameters, got {}",
                    expected,
                    args.len()
                ),
            ));
        }

        for (idx, arg) in args.iter().enumerate() {
            stmt.raw_bind_parameter(idx + 1, arg)
                .map_err(|_| ErrorTranslator::from_connection(self.connection))?;
        }

        // Column names must be captured before iteration borrows the statement.
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = stmt.column_count();

        let mut decoded_rows = Vec::new();
        let mut rows = stmt.raw_query();
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut decoded = Row::with_capacity(column_count);
                    for i in 0..column_count {
                        let value_ref = row.get_ref(i).map_err(ExecutionError::from)?;
                        decoded.push(columns[i].clone(), Value::from(value_ref));
                    }
                    decoded_rows.push(decoded);
                }
                Ok(None) => break,
                Err(_) => return Err(ErrorTranslator::from_connection(self.connection)),
            }
        }

        debug!(rows = decoded_rows.len(), "statement executed");
        Ok(ResultSet::new(columns, decoded_rows))
    }
}

/// Convenience function to execute a single statement on a connection.
pub fn execute_statement_on_connection(
    conn: &Connection,
    sql: &str,
    args: &[Value],
) -> Result<ResultSet> {
    StatementExecutor::new(conn).execute(sql, args)
}
