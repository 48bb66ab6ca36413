//! UI primitives for the Cashbook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and amount colors
//! - **Render**: Record tables, totals, badges, errors

mod context;
pub(crate) mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputFormat;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, print_error, record_table, summary};
