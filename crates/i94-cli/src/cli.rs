//! CLI argument definitions for the I94 warehouse.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "i94-warehouse",
    version,
    about = "I94 Warehouse ETL - build immigration fact and dimension tables",
    long_about = "Transform raw I94 immigration extracts, city temperature observations,\n\
                  and city demographics into a dimensional Parquet warehouse.\n\n\
                  Outputs one fact table partitioned by residence state and five\n\
                  unpartitioned dimension tables, all written in overwrite mode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and materialize every warehouse table.
    Run(RunArgs),

    /// List the warehouse output tables.
    Tables,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Base directory of the raw sources (immigration/, temperature and
    /// demographics CSVs). Required unless --config supplies it.
    #[arg(value_name = "INPUT_ROOT", required_unless_present = "config")]
    pub input_root: Option<PathBuf>,

    /// Base directory the derived tables are written under (default: ./output).
    #[arg(long = "output-root", value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Load the run configuration from a JSON file. Explicit flags override
    /// values from the file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
