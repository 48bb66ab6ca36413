//! Backend trait definition.
//!
//! The `Backend` trait is the seam between the ledger and wherever its
//! lines are kept. The flat-file backend is used in production; the memory
//! backend lets the ledger and menu be exercised without touching disk.

use crate::error::Result;

/// Line-oriented, append-only storage.
///
/// Implementations must ensure:
/// - Existing lines are never rewritten
/// - A missing source reads as empty rather than failing
pub trait Backend {
    /// Read every stored line, in order, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns `CashbookError::Storage` if the source exists but cannot be read.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Append one line, creating the source if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `CashbookError::Storage` if the line could not be written.
    /// The caller must treat the line as not stored.
    fn append_line(&mut self, line: &str) -> Result<()>;

    /// Human-readable location, used in log and error messages.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_backend: Box<dyn Backend>) {}
    }
}
