//! Overwrite-mode Parquet writes, optionally hive-partitioned.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray, ParquetWriter};
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// Directory label for rows whose partition key is null or empty, matching
/// the layout convention of hive-style readers.
pub const NULL_PARTITION_DIR: &str = "__HIVE_DEFAULT_PARTITION__";

/// File name of a written table part.
const PART_FILE: &str = "part-00000.parquet";

/// Writes a table as a single Parquet part under `<output_root>/<table>/`.
///
/// Prior contents at that path are replaced. Returns the table directory.
pub fn write_table(df: &DataFrame, output_root: &Path, table: &str) -> Result<PathBuf> {
    let dir = replace_table_dir(output_root, table)?;
    write_parquet(df.clone(), &dir.join(PART_FILE), table)?;
    info!(table, rows = df.height(), path = %dir.display(), "table materialized");
    Ok(dir)
}

/// Writes a table split into `<column>=<value>/` Parquet parts.
///
/// Rows are routed by the value of `partition_column`; a null or empty key
/// lands in [`NULL_PARTITION_DIR`]. The partition column is retained inside
/// the part files, so each part is self-describing. Prior contents are
/// replaced.
pub fn write_partitioned_table(
    df: &DataFrame,
    output_root: &Path,
    table: &str,
    partition_column: &str,
) -> Result<PathBuf> {
    let column = df
        .column(partition_column)
        .map_err(|_| OutputError::MissingPartitionColumn {
            table: table.to_string(),
            column: partition_column.to_string(),
        })?
        .clone();

    let dir = replace_table_dir(output_root, table)?;
    let height = df.height();

    let mut labels = Vec::with_capacity(height);
    for idx in 0..height {
        let value = column.get(idx).map_err(|e| OutputError::Write {
            table: table.to_string(),
            message: e.to_string(),
        })?;
        labels.push(partition_dir_label(&value));
    }

    let mut masks: BTreeMap<String, Vec<bool>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        masks
            .entry(label.clone())
            .or_insert_with(|| vec![false; height])[idx] = true;
    }

    for (label, keep) in &masks {
        let mask = BooleanChunked::from_slice("partition".into(), keep);
        let part = df.filter(&mask).map_err(|e| OutputError::Write {
            table: table.to_string(),
            message: e.to_string(),
        })?;

        let part_dir = dir.join(format!("{partition_column}={label}"));
        std::fs::create_dir_all(&part_dir).map_err(|source| OutputError::CreateDir {
            path: part_dir.clone(),
            source,
        })?;
        debug!(table, partition = %label, rows = part.height(), "writing partition");
        write_parquet(part, &part_dir.join(PART_FILE), table)?;
    }

    info!(
        table,
        rows = height,
        partitions = masks.len(),
        path = %dir.display(),
        "table materialized"
    );
    Ok(dir)
}

/// Replaces the table directory, dropping any prior materialization.
fn replace_table_dir(output_root: &Path, table: &str) -> Result<PathBuf> {
    let dir = output_root.join(table);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).map_err(|source| OutputError::ReplaceDir {
            path: dir.clone(),
            source,
        })?;
    }
    std::fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

fn write_parquet(mut df: DataFrame, path: &Path, table: &str) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .map_err(|e| OutputError::Write {
            table: table.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

/// Maps a partition key value to a filesystem-safe directory label.
///
/// Bytes outside `[A-Za-z0-9-_.]` are percent-encoded, so distinct key
/// values always get distinct directories. Null and empty keys both land
/// in [`NULL_PARTITION_DIR`], matching the hive layout convention.
fn partition_dir_label(value: &AnyValue<'_>) -> String {
    let text = match value {
        AnyValue::Null => return NULL_PARTITION_DIR.to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        return NULL_PARTITION_DIR.to_string();
    }
    let mut label = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                label.push(byte as char);
            }
            _ => {
                let _ = write!(label, "%{byte:02X}");
            }
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{ParquetReader, SerReader, df};
    use tempfile::TempDir;

    fn read_parquet(path: &Path) -> DataFrame {
        ParquetReader::new(File::open(path).unwrap()).finish().unwrap()
    }

    #[test]
    fn write_table_round_trips() {
        let out = TempDir::new().unwrap();
        let table = df!("city" => ["Quincy", "Hoover"], "pop" => [93629i64, 84839]).unwrap();

        let dir = write_table(&table, out.path(), "demographics").unwrap();

        let back = read_parquet(&dir.join("part-00000.parquet"));
        assert_eq!(back.height(), 2);
        assert_eq!(back.width(), 2);
    }

    #[test]
    fn overwrite_replaces_prior_contents() {
        let out = TempDir::new().unwrap();
        let first = df!("a" => [1i64, 2, 3]).unwrap();
        let dir = write_table(&first, out.path(), "t").unwrap();
        // A stale artifact from an earlier run must not survive a rewrite.
        std::fs::write(dir.join("stale.parquet"), b"junk").unwrap();

        let second = df!("a" => [9i64]).unwrap();
        let dir = write_table(&second, out.path(), "t").unwrap();

        assert!(!dir.join("stale.parquet").exists());
        assert_eq!(read_parquet(&dir.join("part-00000.parquet")).height(), 1);
    }

    #[test]
    fn partitioned_write_routes_every_row_to_its_key() {
        let out = TempDir::new().unwrap();
        let table = df!(
            "state" => [Some("CA"), Some("NY"), Some("CA"), None],
            "record_id" => [1i64, 2, 3, 4],
        )
        .unwrap();

        let dir = write_partitioned_table(&table, out.path(), "fact", "state").unwrap();

        for (label, expected_rows) in [("CA", 2), ("NY", 1), (NULL_PARTITION_DIR, 1)] {
            let part = read_parquet(&dir.join(format!("state={label}")).join("part-00000.parquet"));
            assert_eq!(part.height(), expected_rows, "partition {label}");
            if label != NULL_PARTITION_DIR {
                let states = part.column("state").unwrap().str().unwrap();
                assert!(states.into_iter().all(|v| v == Some(label)));
            }
        }
    }

    #[test]
    fn missing_partition_column_is_reported() {
        let out = TempDir::new().unwrap();
        let table = df!("a" => [1i64]).unwrap();
        let error = write_partitioned_table(&table, out.path(), "fact", "state").unwrap_err();
        assert!(matches!(error, OutputError::MissingPartitionColumn { .. }));
    }

    #[test]
    fn partition_labels_are_filesystem_safe() {
        assert_eq!(partition_dir_label(&AnyValue::String("CA")), "CA");
        assert_eq!(partition_dir_label(&AnyValue::String("B/C D")), "B%2FC%20D");
        assert_eq!(partition_dir_label(&AnyValue::String("")), NULL_PARTITION_DIR);
        assert_eq!(partition_dir_label(&AnyValue::Null), NULL_PARTITION_DIR);
    }

    #[test]
    fn partition_labels_never_collide_for_distinct_keys() {
        // Escaping the separator itself keeps the mapping injective: a key
        // that already looks like an encoded or underscored form cannot be
        // confused with the key it resembles.
        assert_ne!(
            partition_dir_label(&AnyValue::String("B/C")),
            partition_dir_label(&AnyValue::String("B_C"))
        );
        assert_ne!(
            partition_dir_label(&AnyValue::String("B/C")),
            partition_dir_label(&AnyValue::String("B%2FC"))
        );
    }

    #[test]
    fn distinct_keys_with_clashing_safe_forms_route_to_distinct_partitions() {
        let out = TempDir::new().unwrap();
        let table = df!(
            "state" => ["B/C", "B_C"],
            "record_id" => [1i64, 2],
        )
        .unwrap();

        let dir = write_partitioned_table(&table, out.path(), "fact", "state").unwrap();

        for (label, key, id) in [("B%2FC", "B/C", 1i64), ("B_C", "B_C", 2)] {
            let part = read_parquet(&dir.join(format!("state={label}")).join("part-00000.parquet"));
            assert_eq!(part.height(), 1, "partition {label}");
            let states = part.column("state").unwrap().str().unwrap();
            assert!(states.into_iter().all(|v| v == Some(key)));
            let ids = part.column("record_id").unwrap().i64().unwrap();
            assert!(ids.into_iter().all(|v| v == Some(id)));
        }
    }
}
