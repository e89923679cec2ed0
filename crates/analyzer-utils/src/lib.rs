//! Shared utilities for stock-analyzer
//!
//! Logging setup and small environment helpers used by the client library
//! and the command-line binary.

pub mod env;
pub mod logging;

pub use env::var_non_empty;
pub use logging::init_tracing;
