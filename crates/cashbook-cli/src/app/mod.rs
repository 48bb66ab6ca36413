//! Application-level utilities for the Cashbook CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and ledger files
//! - Settings loading

mod context;
mod resolver;
mod settings;

// Re-export public API
pub use context::AppContext;
