//! Parquet materialization for the I94 warehouse.
//!
//! Every write is full-overwrite: the table directory is replaced, never
//! merged or appended, so a run is idempotent with respect to final state
//! and destructive with respect to history. One table's failure does not
//! roll back tables already written; there is no cross-table transaction.

pub mod error;
pub mod materializer;

pub use error::{OutputError, Result};
pub use materializer::{NULL_PARTITION_DIR, write_partitioned_table, write_table};
