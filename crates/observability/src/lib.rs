//! Tracing/logging setup shared by hosts of the shell.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use self::tracing::{LogFormat, init, init_with};
