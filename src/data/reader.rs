//! CSV dataset reader.

use super::StateRow;
use crate::error::{DemoscopeError, Result};
use std::fs::File;
use std::path::Path;

/// Columns the dataset header must provide.
const REQUIRED_COLUMNS: [&str; 8] = [
    "state",
    "abbr",
    "poverty",
    "age",
    "income",
    "healthcare",
    "obesity",
    "smokes",
];

/// State metrics CSV reader.
#[derive(Debug)]
pub struct DatasetReader;

impl DatasetReader {
    /// Read a state metrics CSV file.
    ///
    /// The file must carry all required columns in its header (any order,
    /// surrounding whitespace tolerated). A record with a missing or
    /// non-numeric metric fails the whole load; rows are never silently
    /// dropped. A header-only file is rejected as well, since a scatter
    /// plot of zero rows has no defined scale domain.
    pub fn read_file(path: &Path) -> Result<Vec<StateRow>> {
        let file =
            File::open(path).map_err(|e| DemoscopeError::file_open(path.to_path_buf(), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        Self::check_header(path, &mut reader)?;

        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<StateRow>().enumerate() {
            let row = record.map_err(|e| DemoscopeError::parse(index + 1, e))?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DemoscopeError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn check_header<R: std::io::Read>(path: &Path, reader: &mut csv::Reader<R>) -> Result<()> {
        let headers = reader
            .headers()
            .map_err(|e| DemoscopeError::parse(0, e))?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DemoscopeError::header(path.to_path_buf(), column));
            }
        }
        Ok(())
    }
}
