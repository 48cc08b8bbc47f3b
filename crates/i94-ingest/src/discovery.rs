//! Discovery of immigration extract files.
//!
//! The immigration source arrives as one file per extract period dropped
//! into a single directory; a run picks up every extract present.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Extensions recognized as immigration extracts (case-insensitive).
const SOURCE_EXTENSIONS: [&str; 1] = ["csv"];

/// Lists all immigration extract files in a directory.
///
/// Returns files sorted by filename so a run processes extracts in a
/// stable order regardless of directory iteration order.
///
/// # Errors
///
/// Returns [`IngestError::DirectoryNotFound`] when the directory is missing,
/// [`IngestError::DirectoryRead`] when it cannot be listed, and
/// [`IngestError::NoSourceFiles`] when no extract file is present.
pub fn discover_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_source = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                SOURCE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);

        if is_source {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(IngestError::NoSourceFiles {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = files.len(), dir = %dir.display(), "discovered source files");

    Ok(files)
}
