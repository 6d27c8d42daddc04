// 💾 HOA Persistence - Save with lazy header and name-based dedup
//
// One save = probe write, optional header write, read for dedup, data write.
// Single-writer assumption: two concurrent saves on the same path can both
// write a header or both miss each other's rows. Callers serialize access.

use crate::codec;
use crate::entities::hoa::{Hoa, NAME_COLUMN};
use crate::error::StoreError;
use crate::reader::{CsvRead, FsCsvReader};
use crate::writer::{AppendOutcome, CsvWrite, FsCsvWriter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_HEADER: [&str; 6] = ["ID", "Name", "Address", "Agent Name", "Status", "Location"];

const ENTITY: &str = "Hoa";

// ============================================================================
// PERSISTENCE TRAIT
// ============================================================================

pub trait HoaPersistence {
    /// Persist `hoas`, returning them unchanged on success.
    ///
    /// Records whose name is already on disk are silently skipped, but the
    /// returned list is always the full input.
    fn save(&self, hoas: Vec<Hoa>) -> Result<Vec<Hoa>, StoreError>;
}

// ============================================================================
// CSV-BACKED PERSISTENCE
// ============================================================================

pub struct HoaCsvPersistence<W = FsCsvWriter, R = FsCsvReader> {
    file_path: PathBuf,
    header: Vec<String>,
    writer: W,
    reader: R,
}

impl HoaCsvPersistence {
    /// Filesystem-backed store at `file_path`
    pub fn open(file_path: impl Into<PathBuf>) -> Self {
        Self::new(file_path, FsCsvWriter::new(), FsCsvReader::new())
    }
}

impl<W: CsvWrite, R: CsvRead> HoaCsvPersistence<W, R> {
    pub fn new(file_path: impl Into<PathBuf>, writer: W, reader: R) -> Self {
        HoaCsvPersistence {
            file_path: file_path.into(),
            header: DEFAULT_HEADER.iter().map(|h| h.to_string()).collect(),
            writer,
            reader,
        }
    }

    /// Replace the header labels written to a fresh file
    pub fn with_header<S: Into<String>>(mut self, header: impl IntoIterator<Item = S>) -> Self {
        self.header = header.into_iter().map(Into::into).collect();
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    fn write(&self, rows: &[Vec<String>]) -> Result<AppendOutcome, StoreError> {
        self.writer
            .write_append(&self.file_path, rows)
            .map_err(|e| StoreError::from_collaborator(ENTITY, e))
    }

    // ========================================================================
    // DEDUP
    // ========================================================================

    /// Drop records whose trimmed name already appears in the file.
    ///
    /// Fails open: if the file cannot be read or decoded, every record is kept.
    pub fn remove_duplicates(&self, hoas: Vec<Hoa>) -> Vec<Hoa> {
        let existing = match self
            .reader
            .read(&self.file_path)
            .and_then(|content| Ok(self.existing_names(&content)?))
        {
            Ok(names) => names,
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "dedup skipped, file unreadable");
                return hoas;
            }
        };

        if existing.is_empty() {
            return hoas;
        }

        let before = hoas.len();
        let unique: Vec<Hoa> = hoas
            .into_iter()
            .filter(|hoa| !existing.contains(hoa.dedup_key()))
            .collect();

        debug!(
            path = %self.file_path.display(),
            dropped = before - unique.len(),
            "deduplicated against existing rows"
        );
        unique
    }

    /// Names of every persisted data row.
    ///
    /// The first non-blank row is the header, whatever its labels; later rows
    /// equal to the configured header are skipped too.
    fn existing_names(&self, content: &str) -> Result<HashSet<String>, StoreError> {
        let names = codec::decode_records(content)?
            .into_iter()
            .skip(1)
            .filter(|row| !self.is_header(row))
            .filter_map(|row| row.get(NAME_COLUMN).map(|name| name.trim().to_string()))
            .filter(|name| !name.is_empty())
            .collect();

        Ok(names)
    }

    fn is_header(&self, row: &[String]) -> bool {
        row.len() == self.header.len()
            && row.iter().zip(&self.header).all(|(cell, label)| cell.trim() == label.trim())
    }

    // ========================================================================
    // MAPPING
    // ========================================================================

    /// Escaped CSV rows in persisted column order
    pub fn map_to_csv(&self, hoas: &[Hoa]) -> Vec<Vec<String>> {
        hoas.iter().map(|hoa| codec::encode_row(&hoa.to_row())).collect()
    }
}

impl<W: CsvWrite, R: CsvRead> HoaPersistence for HoaCsvPersistence<W, R> {
    fn save(&self, hoas: Vec<Hoa>) -> Result<Vec<Hoa>, StoreError> {
        let probe = self.write(&[vec![]])?;

        if probe.needs_header() {
            self.write(&[codec::encode_row(&self.header)])?;
            debug!(path = %self.file_path.display(), "wrote header");
        }

        let unique = self.remove_duplicates(hoas.clone());
        let rows = self.map_to_csv(&unique);
        let outcome = self.write(&rows)?;

        info!(
            path = %self.file_path.display(),
            submitted = hoas.len(),
            written = outcome.rows_written,
            "saved hoas"
        );

        Ok(hoas)
    }
}
