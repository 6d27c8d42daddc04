// 📖 CSV Reader - Whole-file read, CSV paths only

use crate::error::StoreError;
use std::fs;
use std::path::Path;

pub const CSV_EXTENSION: &str = "csv";

/// Full-content read, the seam the persistence layer reads through.
pub trait CsvRead {
    fn read(&self, path: &Path) -> anyhow::Result<String>;
}

/// Filesystem-backed reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCsvReader;

impl FsCsvReader {
    pub fn new() -> Self {
        FsCsvReader
    }

    /// Read the entire file as UTF-8 text.
    ///
    /// Paths without a `.csv` extension are rejected before any disk access.
    pub fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
        if !is_csv_path(path) {
            return Err(StoreError::NotCsvFile {
                path: path.to_path_buf(),
            });
        }

        fs::read_to_string(path).map_err(|e| StoreError::io(path, e))
    }
}

impl CsvRead for FsCsvReader {
    fn read(&self, path: &Path) -> anyhow::Result<String> {
        Ok(self.read_to_string(path)?)
    }
}

fn is_csv_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CSV_EXTENSION)
}
