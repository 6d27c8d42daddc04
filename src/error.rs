// ⚠️ Store Errors - One error type for the whole persistence layer
// Errors are returned as values from every layer; nothing panics across a boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the CSV store can report.
///
/// - `NotCsvFile`: the reader refused a path before touching disk
/// - `Io`: directory creation, file creation, append or read failed
/// - `Csv`: existing content could not be decoded
/// - `Persisting`: catch-all raised by the orchestrator for foreign errors
/// - `MissingEnvVar`: a required configuration variable is not set
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("The file is not a CSV file: {}", .path.display())]
    NotCsvFile { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Issue persisting the entity: {entity}")]
    Persisting {
        entity: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Environment Variable [{name}] Not Found: \"{description}\".")]
    MissingEnvVar { name: String, description: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Collapse an arbitrary collaborator error into a `StoreError`.
    ///
    /// Errors that already are a `StoreError` pass through untouched,
    /// anything else becomes `Persisting` tagged with `entity`.
    pub fn from_collaborator(entity: &str, err: anyhow::Error) -> Self {
        match err.downcast::<StoreError>() {
            Ok(store_err) => store_err,
            Err(other) => StoreError::Persisting {
                entity: entity.to_string(),
                source: other.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_csv_display() {
        let err = StoreError::NotCsvFile {
            path: PathBuf::from("data/hoa.txt"),
        };
        assert_eq!(err.to_string(), "The file is not a CSV file: data/hoa.txt");
    }

    #[test]
    fn test_io_display_includes_path_and_cause() {
        let err = StoreError::io(
            "data/hoa.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/hoa.csv"));
        assert!(msg.contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_collaborator_store_error_passes_through() {
        let original: anyhow::Error = StoreError::NotCsvFile {
            path: PathBuf::from("x.json"),
        }
        .into();

        let err = StoreError::from_collaborator("Hoa", original);
        assert!(matches!(err, StoreError::NotCsvFile { .. }));
    }

    #[test]
    fn test_foreign_error_becomes_persisting() {
        let err = StoreError::from_collaborator("Hoa", anyhow::anyhow!("disk on fire"));

        assert!(matches!(err, StoreError::Persisting { ref entity, .. } if entity == "Hoa"));
        assert_eq!(err.to_string(), "Issue persisting the entity: Hoa");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk on fire"));
    }

    #[test]
    fn test_missing_env_var_display() {
        let err = StoreError::MissingEnvVar {
            name: "DATA_STORE_PATH".to_string(),
            description: "Path for the csv files".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Environment Variable [DATA_STORE_PATH] Not Found: \"Path for the csv files\"."
        );
    }
}
