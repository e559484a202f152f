/// Core Module
///
/// This module contains the fundamental components of the crate: the
/// statement-execution layer and the shared error type.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{ExecutionError, Result};
