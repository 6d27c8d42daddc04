// HOA Store - Core Library
// Append-only CSV persistence for HOA records, used by the CLI and tests

pub mod codec;          // Shared CSV field encode/decode
pub mod config;         // Environment configuration
pub mod entities;       // HOA entity model
pub mod error;          // StoreError
pub mod persistence;    // Save with lazy header + name dedup
pub mod reader;         // Guarded full-file read
pub mod repository;     // Identity assignment
pub mod writer;         // Append with lazy file creation

// Re-export commonly used types
pub use codec::{decode_records, encode_row, escape_field};
pub use config::{default_rules, ConfigRule, Configuration};
pub use entities::{Hoa, HoaData, UNAVAILABLE_AGENT};
pub use error::StoreError;
pub use persistence::{HoaCsvPersistence, HoaPersistence, DEFAULT_HEADER};
pub use reader::{CsvRead, FsCsvReader};
pub use repository::HoaRepository;
pub use writer::{normalize_rows, AppendOutcome, CsvWrite, FsCsvWriter};
