//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Console prompting over any reader/writer pair (`input`)
//! - Output format and search criteria parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::Console;
pub use parsing::{build_criteria, parse_output_format, CriteriaInput};
