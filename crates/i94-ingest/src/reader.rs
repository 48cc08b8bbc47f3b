//! Lazy CSV scanning.
//!
//! Sources are scanned lazily: nothing is read from disk until a
//! materialization step forces the plan downstream.

use std::path::{Path, PathBuf};

use polars::prelude::{LazyCsvReader, LazyFileListReader, LazyFrame, PlPath, UnionArgs, concat};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Scans a single CSV source lazily.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when the path is not a file and
/// [`IngestError::CsvScan`] when Polars rejects the file.
pub fn scan_csv(path: &Path) -> Result<LazyFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let path_str = path.to_string_lossy();
    LazyCsvReader::new(PlPath::new(&path_str))
        .with_has_header(true)
        .finish()
        .map_err(|e| IngestError::CsvScan {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Scans a set of same-shaped source files and unions them into one frame.
///
/// Column types are widened to supertypes across files, so an extract where
/// a sparse column degraded to text does not reject the whole batch.
///
/// # Errors
///
/// Fails if any file cannot be scanned or the union cannot be planned.
pub fn scan_sources(paths: &[PathBuf]) -> Result<LazyFrame> {
    let frames = paths
        .iter()
        .map(|path| scan_csv(path))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = frames.len(), "scanning source files");

    let args = UnionArgs {
        to_supertypes: true,
        ..Default::default()
    };
    concat(&frames, args).map_err(|e| IngestError::Union {
        count: paths.len(),
        message: e.to_string(),
    })
}
