//! Error types for table materialization.
//!
//! An unwritable destination is fatal for that table only; siblings already
//! materialized remain on disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while materializing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to remove a prior table directory during overwrite.
    #[error("failed to replace output directory {path}: {source}")]
    ReplaceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output file.
    #[error("failed to create output file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to write or shape the Parquet output.
    #[error("failed to write table '{table}': {message}")]
    Write { table: String, message: String },

    /// The configured partition column is missing from the table.
    #[error("partition column '{column}' missing from table '{table}'")]
    MissingPartitionColumn { table: String, column: String },
}

/// Result alias for materialization operations.
pub type Result<T> = std::result::Result<T, OutputError>;
