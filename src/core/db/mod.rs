/// Database Module
///
/// This module provides the statement-execution core of the crate,
/// organized into focused submodules for better maintainability and
/// separation of concerns.
///
/// ## Architecture
///
/// The database layer is split into three main concerns:
/// - **Value Model** (`value.rs`): The tagged value union plus the `Row` and `ResultSet` containers
/// - **Statement Execution** (`executor.rs`): Prepare, bind, step, and decode one statement
/// - **Error Translation** (`translate.rs`): Packaging the engine's error state as a structured value
///
/// ## Error Handling
///
/// All operations use the structured `ExecutionError` type; the engine's own
/// code and message are surfaced unchanged.
///
/// ## Usage
///
/// Connections are owned by the caller. The executor borrows a connection
/// for the duration of one call and never opens, closes, or reconfigures it.
pub mod executor;
pub mod translate;
pub mod value;

pub use executor::*;
pub use translate::*;
pub use value::*;
