//! Error types for source ingestion.
//!
//! A source-unavailable failure is fatal for the builder that needs it and
//! aborts before any output is written for that builder.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering or scanning raw sources.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source directory not found or not a directory.
    #[error("source directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// No source files discovered in a directory that requires at least one.
    #[error("no source files found in {path}")]
    NoSourceFiles { path: PathBuf },

    /// Polars failed to scan a CSV source.
    #[error("failed to scan CSV {path}: {message}")]
    CsvScan { path: PathBuf, message: String },

    /// Polars failed to union the immigration extracts into one frame.
    #[error("failed to combine {count} source files: {message}")]
    Union { count: usize, message: String },
}

/// Result alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
