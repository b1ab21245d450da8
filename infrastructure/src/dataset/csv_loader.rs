//! CSV gameplay dataset loader
//!
//! Reads a headed CSV with `base_name`, `category` and `tld` columns (other
//! columns are ignored) into an [`InMemoryDataset`]. Rows with any of the
//! three fields missing or blank are skipped.

use super::memory::InMemoryDataset;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tld_guesser_domain::GameplayRow;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 3] = ["base_name", "category", "tld"];

/// Errors raised while loading the gameplay dataset. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum DatasetLoadError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset {path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Dataset {path} has no complete rows ({skipped} skipped)")]
    NoRows { path: PathBuf, skipped: usize },
}

#[derive(Debug, Deserialize)]
struct RawRow {
    base_name: Option<String>,
    category: Option<String>,
    tld: Option<String>,
}

impl RawRow {
    fn into_row(self) -> Option<GameplayRow> {
        GameplayRow::try_new(self.base_name?, self.category?, self.tld?).ok()
    }
}

/// Loader for the gameplay CSV
pub struct CsvDatasetLoader;

impl CsvDatasetLoader {
    /// Load the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<InMemoryDataset, DatasetLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| DatasetLoadError::Read {
            path: path.to_path_buf(),
            source: csv::Error::from(e),
        })?;

        Self::from_reader(file, path)
    }

    /// Load the dataset from any reader; `path` is only used in errors and logs.
    pub fn from_reader<R: io::Read>(
        reader: R,
        path: &Path,
    ) -> Result<InMemoryDataset, DatasetLoadError> {
        let read_err = |source| DatasetLoadError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(read_err)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetLoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for record in reader.deserialize::<RawRow>() {
            match record.map_err(read_err)?.into_row() {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} incomplete rows in {}", skipped, path.display());
        }

        let dataset = InMemoryDataset::new(rows).map_err(|_| DatasetLoadError::NoRows {
            path: path.to_path_buf(),
            skipped,
        })?;

        info!(
            "Gameplay dataset loaded ({} rows, {} skipped) from {}",
            dataset.rows().len(),
            skipped,
            path.display()
        );
        Ok(dataset)
    }
}
