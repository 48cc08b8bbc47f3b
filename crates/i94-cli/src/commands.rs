use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::info;

use i94_model::tables::WAREHOUSE_TABLES;
use i94_model::{WarehouseConfig, default_output_root};

use crate::cli::RunArgs;
use crate::pipeline::run_warehouse;
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// `tables` subcommand: list the warehouse output tables.
pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Description", "Partitioned by"]);
    apply_table_style(&mut table);
    for spec in &WAREHOUSE_TABLES {
        table.add_row(vec![
            spec.name,
            spec.description,
            spec.partitioned_by.unwrap_or("-"),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `run` subcommand: resolve configuration and execute the pipeline.
pub fn run_warehouse_command(args: &RunArgs) -> Result<RunResult> {
    let config = resolve_config(args)?;
    info!(
        input_root = %config.input_root.display(),
        output_root = %config.output_root.display(),
        "starting warehouse run"
    );
    run_warehouse(&config)
}

/// Builds the run configuration from CLI flags, with an optional JSON file
/// as the base. Explicit flags win over file values.
fn resolve_config(args: &RunArgs) -> Result<WarehouseConfig> {
    let mut config = match &args.config {
        Some(path) => WarehouseConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => {
            let input_root = args
                .input_root
                .clone()
                .ok_or_else(|| anyhow!("INPUT_ROOT is required when no --config is given"))?;
            WarehouseConfig::new(input_root, default_output_root())
        }
    };
    if let Some(input_root) = &args.input_root {
        config.input_root = input_root.clone();
    }
    if let Some(output_root) = &args.output_root {
        config.output_root = output_root.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(
        input_root: Option<&str>,
        output_root: Option<&str>,
        config: Option<PathBuf>,
    ) -> RunArgs {
        RunArgs {
            input_root: input_root.map(PathBuf::from),
            output_root: output_root.map(PathBuf::from),
            config,
        }
    }

    #[test]
    fn flags_alone_build_a_config() {
        let config = resolve_config(&args(Some("/data/raw"), Some("/data/out"), None)).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/data/raw"));
        assert_eq!(config.output_root, PathBuf::from("/data/out"));
    }

    #[test]
    fn output_root_defaults_when_not_given() {
        let config = resolve_config(&args(Some("/data/raw"), None, None)).unwrap();
        assert_eq!(config.output_root, default_output_root());
    }

    #[test]
    fn flags_override_config_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warehouse.json");
        std::fs::write(
            &path,
            r#"{"input_root": "/file/raw", "output_root": "/file/out"}"#,
        )
        .unwrap();

        let config = resolve_config(&args(None, Some("/flag/out"), Some(path))).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/file/raw"));
        assert_eq!(config.output_root, PathBuf::from("/flag/out"));
    }

    #[test]
    fn missing_input_root_without_config_is_an_error() {
        assert!(resolve_config(&args(None, None, None)).is_err());
    }
}
