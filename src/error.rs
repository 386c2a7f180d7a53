//! Error types for Demoscope.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Demoscope operations.
pub type Result<T> = std::result::Result<T, DemoscopeError>;

/// Errors that can occur in Demoscope.
#[derive(Debug, Error)]
pub enum DemoscopeError {
    /// Failed to open the dataset file.
    #[error("Failed to open dataset: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset header is missing a required column.
    #[error("Malformed header in {path}: missing column '{column}'")]
    Header {
        /// Path of the offending file.
        path: PathBuf,
        /// First required column that was not found.
        column: String,
    },

    /// A record could not be parsed into a state row.
    #[error("Failed to parse record {record}")]
    Parse {
        /// 1-based data record number (header excluded).
        record: usize,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The dataset contains a header but no rows.
    #[error("Empty dataset: {path} has no data rows")]
    EmptyDataset {
        /// Path of the offending file.
        path: PathBuf,
    },
}

impl DemoscopeError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Header error.
    pub fn header(path: PathBuf, column: impl Into<String>) -> Self {
        Self::Header {
            path,
            column: column.into(),
        }
    }

    /// Create a Parse error.
    pub fn parse(record: usize, source: csv::Error) -> Self {
        Self::Parse { record, source }
    }
}
