//! In-memory backend for tests and dry runs.

use super::traits::Backend;
use crate::error::{CashbookError, Result};

/// Lines held in a `Vec`, with an optional simulated write failure.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    lines: Vec<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given lines already stored.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent `append_line` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Backend for MemoryBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CashbookError::Storage(
                "memory backend is read-only".to_string(),
            ));
        }
        self.lines.push(line.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_then_read() {
        let mut backend = MemoryBackend::with_lines(["a"]);
        backend.append_line("b").unwrap();
        assert_eq!(backend.read_lines().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_failing_writes_leave_lines_untouched() {
        let mut backend = MemoryBackend::with_lines(["a"]).failing_writes();
        assert!(backend.append_line("b").is_err());
        assert_eq!(backend.lines(), ["a".to_string()]);
    }
}
