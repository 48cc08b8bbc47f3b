//! Raw source discovery and lazy CSV scanning for the I94 warehouse.
//!
//! Transformations downstream are lazy Polars pipelines; this crate produces
//! the [`polars::prelude::LazyFrame`]s they start from and the typed errors
//! a missing or unreadable source surfaces as.

pub mod discovery;
pub mod error;
pub mod reader;

pub use discovery::discover_source_files;
pub use error::{IngestError, Result};
pub use reader::{scan_csv, scan_sources};
