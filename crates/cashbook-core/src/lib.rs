//! # Cashbook Core
//!
//! Core library for Cashbook - a plain-text personal finance ledger.
//!
//! This crate provides the record model, the line-delimited persistence
//! format, and the filter and report logic, independent of the CLI.
//!
//! ## Architecture
//!
//! - **record**: The `Record` type and its `date|time|description|vendor|amount` line form
//! - **storage**: Backends (flat file, memory) and the `Ledger` that owns loaded records
//! - **period**: Inclusive date ranges and named report periods
//! - **filter**: Pure filters (deposits, payments, date ranges, vendor, custom search)
//! - **present**: Newest-first sorting and plain-text rendering

pub mod error;
pub mod filter;
pub mod period;
pub mod present;
pub mod record;
pub mod storage;

pub use error::{CashbookError, Result};
pub use filter::SearchCriteria;
pub use period::{DateRange, Period};
pub use record::Record;
pub use storage::{Backend, FlatFile, Ledger, LoadPolicy, LoadReport, MemoryBackend};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
