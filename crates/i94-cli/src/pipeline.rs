//! Warehouse pipeline with explicit stages.
//!
//! 1. **Ingest**: Discover immigration extracts, scan raw sources lazily
//! 2. **Reconcile**: Apply the shared date reconciliation once
//! 3. **Build + materialize**: Each table projects, dedups, assigns
//!    surrogates, and is written in overwrite mode
//!
//! Tables are independent: a failed table is recorded and its siblings
//! still materialize. There is no cross-table transaction and no retry; a
//! failed run is re-invoked wholesale.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::LazyFrame;
use tracing::{info, info_span, warn};

use i94_ingest::{discover_source_files, scan_csv, scan_sources};
use i94_model::columns::fact;
use i94_model::tables::{
    AIRLINE, DEMOGRAPHICS, DIM_TEMPERATURE, FACT_IMMIGRATION, PERSONAL, VIS_DIM,
};
use i94_model::WarehouseConfig;
use i94_output::{write_partitioned_table, write_table};
use i94_transform::{
    build_airline_dim, build_demographics_dim, build_fact_immigration, build_personal_dim,
    build_temperature_dim, build_visa_dim, reconcile_immigration_dates,
};

use crate::types::{RunResult, TableSummary};

/// Runs the full pipeline: every warehouse table, in registry order.
///
/// Returns `Ok` even when individual tables fail; per-table errors are
/// carried in the result and `has_errors` drives the process exit code.
pub fn run_warehouse(config: &WarehouseConfig) -> Result<RunResult> {
    let mut tables = Vec::new();

    // =========================================================================
    // Stage 1+2: Ingest the immigration extracts and reconcile dates once.
    // The four immigration-derived tables share the reconciled frame.
    // =========================================================================
    match ingest_immigration(config) {
        Ok(reconciled) => {
            tables.push(materialize(
                FACT_IMMIGRATION,
                build_fact_immigration(reconciled.clone()),
                Some(fact::STATE),
                config,
            ));
            tables.push(materialize(
                PERSONAL,
                build_personal_dim(reconciled.clone()),
                None,
                config,
            ));
            tables.push(materialize(
                AIRLINE,
                build_airline_dim(reconciled.clone()),
                None,
                config,
            ));
            tables.push(materialize(
                VIS_DIM,
                build_visa_dim(reconciled),
                None,
                config,
            ));
        }
        Err(error) => {
            // The shared source is gone: every immigration-derived table
            // fails before any of its output is written.
            let message = format!("{error:#}");
            warn!(error = %message, "immigration source unavailable");
            for name in [FACT_IMMIGRATION, PERSONAL, AIRLINE, VIS_DIM] {
                tables.push(failed(name, message.clone()));
            }
        }
    }

    // =========================================================================
    // Stage 3: Independent dimension sources.
    // =========================================================================
    tables.push(match scan_csv(&config.temperature_source()) {
        Ok(observations) => materialize(
            DIM_TEMPERATURE,
            build_temperature_dim(observations),
            None,
            config,
        ),
        Err(error) => failed(DIM_TEMPERATURE, error.to_string()),
    });

    tables.push(match scan_csv(&config.demographics_source()) {
        Ok(snapshot) => materialize(
            DEMOGRAPHICS,
            build_demographics_dim(snapshot),
            None,
            config,
        ),
        Err(error) => failed(DEMOGRAPHICS, error.to_string()),
    });

    let has_errors = tables.iter().any(|table| table.error.is_some());
    Ok(RunResult {
        output_root: config.output_root.clone(),
        tables,
        has_errors,
    })
}

/// Discovers, scans, and date-reconciles the immigration source.
fn ingest_immigration(config: &WarehouseConfig) -> Result<LazyFrame> {
    let dir = config.immigration_dir();
    let files = discover_source_files(&dir).context("discover immigration extracts")?;
    info!(count = files.len(), dir = %dir.display(), "immigration extracts discovered");
    let raw = scan_sources(&files).context("scan immigration extracts")?;
    Ok(reconcile_immigration_dates(raw))
}

/// Collects one table's plan and writes it, recording the outcome.
fn materialize(
    name: &'static str,
    frame: LazyFrame,
    partitioned_by: Option<&'static str>,
    config: &WarehouseConfig,
) -> TableSummary {
    let span = info_span!("materialize", table = name);
    let _guard = span.enter();

    match collect_and_write(name, frame, partitioned_by, config) {
        Ok((rows, path)) => TableSummary {
            name,
            rows,
            partitioned_by,
            path: Some(path),
            error: None,
        },
        Err(error) => {
            let message = format!("{error:#}");
            warn!(table = name, error = %message, "materialization failed");
            failed_with_partition(name, partitioned_by, message)
        }
    }
}

fn collect_and_write(
    name: &str,
    frame: LazyFrame,
    partitioned_by: Option<&str>,
    config: &WarehouseConfig,
) -> Result<(usize, PathBuf)> {
    let df = frame
        .collect()
        .with_context(|| format!("build table {name}"))?;
    let path = match partitioned_by {
        Some(key) => write_partitioned_table(&df, &config.output_root, name, key)?,
        None => write_table(&df, &config.output_root, name)?,
    };
    Ok((df.height(), path))
}

fn failed(name: &'static str, message: String) -> TableSummary {
    failed_with_partition(name, None, message)
}

fn failed_with_partition(
    name: &'static str,
    partitioned_by: Option<&'static str>,
    message: String,
) -> TableSummary {
    TableSummary {
        name,
        rows: 0,
        partitioned_by,
        path: None,
        error: Some(message),
    }
}
