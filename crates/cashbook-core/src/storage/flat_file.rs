//! Flat-file backend: one record per line in a plain text file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::Backend;
use crate::error::{CashbookError, Result};

/// A ledger file on disk, opened in append mode for writes.
#[derive(Debug, Clone)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FlatFile {
    fn read_lines(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(CashbookError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        Ok(contents.lines().map(String::from).collect())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CashbookError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                CashbookError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        // A hand-edited file may lack its final newline.
        let mut buffer = String::with_capacity(line.len() + 2);
        if !ends_with_newline(&mut file)? {
            buffer.push('\n');
        }
        buffer.push_str(line);
        buffer.push('\n');

        file.write_all(buffer.as_bytes())
            .and_then(|_| file.sync_data())
            .map_err(|e| {
                CashbookError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// True for an empty file or one whose last byte is `\n`.
fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let backend = FlatFile::new(dir.path().join("absent.csv"));
        assert!(backend.read_lines().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_file_and_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("transactions.csv");
        let mut backend = FlatFile::new(&path);

        backend.append_line("first").unwrap();
        backend.append_line("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(backend.read_lines().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        fs::write(&path, "kept\n").unwrap();

        let mut backend = FlatFile::new(&path);
        backend.append_line("added").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\nadded\n");
    }

    #[test]
    fn test_append_after_missing_final_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        fs::write(&path, "kept").unwrap();

        let mut backend = FlatFile::new(&path);
        backend.append_line("added").unwrap();

        assert_eq!(backend.read_lines().unwrap(), vec!["kept", "added"]);
    }

    #[test]
    fn test_read_handles_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.csv");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();

        let backend = FlatFile::new(&path);
        assert_eq!(backend.read_lines().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_append_to_directory_fails() {
        let dir = tempdir().unwrap();
        let mut backend = FlatFile::new(dir.path());
        assert!(matches!(
            backend.append_line("x"),
            Err(CashbookError::Storage(_))
        ));
    }
}
