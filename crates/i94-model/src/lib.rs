//! I94 warehouse data model definitions.
//!
//! This crate holds the shared vocabulary of the warehouse: raw source
//! column names, derived table column names, the output table registry,
//! and the run configuration. It is dependency-light on purpose so every
//! other crate can name columns and tables without pulling in Polars.

pub mod columns;
pub mod config;
pub mod error;
pub mod tables;

pub use config::{WarehouseConfig, default_output_root};
pub use error::ConfigError;
pub use tables::{TableSpec, WAREHOUSE_TABLES, table_spec};
