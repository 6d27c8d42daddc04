// ✍️ CSV Writer - Append rows, creating the file on first use
//
// A call with a single empty row (`[[]]`) is the probe idiom: it creates the
// file and its parent directories if needed and reports whether it did so,
// without appending anything.

use crate::error::StoreError;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

// ============================================================================
// APPEND OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendOutcome {
    /// True exactly when this call created the file
    pub initialized: bool,

    /// File held zero bytes before this call (always true when `initialized`)
    pub was_empty: bool,

    /// Rows appended after normalisation
    pub rows_written: usize,
}

impl AppendOutcome {
    /// Whether the file still lacks any content, header included.
    pub fn needs_header(&self) -> bool {
        self.initialized || self.was_empty
    }
}

// ============================================================================
// WRITER TRAIT
// ============================================================================

/// Append-with-lazy-init, the seam the persistence layer writes through.
pub trait CsvWrite {
    fn write_append(&self, path: &Path, rows: &[Vec<String>]) -> anyhow::Result<AppendOutcome>;
}

/// Filesystem-backed writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCsvWriter;

impl FsCsvWriter {
    pub fn new() -> Self {
        FsCsvWriter
    }

    /// Append `rows` to `path`, creating the file (and its directories) if absent.
    pub fn append(&self, path: &Path, rows: &[Vec<String>]) -> Result<AppendOutcome, StoreError> {
        let existed = path.exists();

        let was_empty = if existed {
            fs::metadata(path)
                .map_err(|e| StoreError::io(path, e))?
                .len()
                == 0
        } else {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
            }
            File::create(path).map_err(|e| StoreError::io(path, e))?;
            debug!(path = %path.display(), "created csv file");
            true
        };

        let rows = normalize_rows(rows);
        let mut outcome = AppendOutcome {
            initialized: !existed,
            was_empty,
            rows_written: 0,
        };

        if rows.is_empty() {
            return Ok(outcome);
        }

        let mut block = rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n");
        block.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| StoreError::io(path, e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| StoreError::io(path, e))?;

        outcome.rows_written = rows.len();
        debug!(path = %path.display(), rows = rows.len(), "appended rows");

        Ok(outcome)
    }
}

impl CsvWrite for FsCsvWriter {
    fn write_append(&self, path: &Path, rows: &[Vec<String>]) -> anyhow::Result<AppendOutcome> {
        Ok(self.append(path, rows)?)
    }
}

// ============================================================================
// ROW NORMALISATION
// ============================================================================

/// Trim every cell, pad rows to the widest row, then drop rows with no content.
pub fn normalize_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(|c| c.trim().to_string()).collect();
            cells.resize(width, String::new());
            cells
        })
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_probe_initializes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hoa.csv");
        let writer = FsCsvWriter::new();

        let first = writer.append(&path, &[vec![]]).unwrap();
        let second = writer.append(&path, &[vec![]]).unwrap();

        assert!(first.initialized);
        assert!(!second.initialized);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_probe_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("hoa.csv");

        let outcome = FsCsvWriter::new().append(&path, &[vec![]]).unwrap();

        assert!(outcome.initialized);
        assert!(path.exists());
        assert_eq!(outcome.rows_written, 0);
    }

    #[test]
    fn test_existing_empty_file_reports_was_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hoa.csv");
        File::create(&path).unwrap();

        let outcome = FsCsvWriter::new().append(&path, &[vec![]]).unwrap();

        assert!(!outcome.initialized);
        assert!(outcome.was_empty);
        assert!(outcome.needs_header());
    }

    #[test]
    fn test_blank_rows_are_dropped_and_rows_padded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hoa.csv");

        let outcome = FsCsvWriter::new()
            .append(&path, &[row(&["a", ""]), row(&["", ""])])
            .unwrap();

        assert_eq!(outcome.rows_written, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,\n");
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hoa.csv");
        let writer = FsCsvWriter::new();

        writer.append(&path, &[row(&[" 1 ", "A"])]).unwrap();
        let outcome = writer.append(&path, &[row(&["2", "B"]), row(&["3"])]).unwrap();

        assert!(!outcome.was_empty);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,A\n2,B\n3,\n");
    }

    #[test]
    fn test_unwritable_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("hoa.csv");

        let err = FsCsvWriter::new().append(&path, &[vec![]]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_normalize_rows() {
        let rows = normalize_rows(&[row(&["  x "]), row(&["", " ", ""]), row(&["y", "z"])]);
        assert_eq!(rows, vec![row(&["x", "", ""]), row(&["y", "z", ""])]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_rows(&[]).is_empty());
        assert!(normalize_rows(&[vec![]]).is_empty());
    }
}
