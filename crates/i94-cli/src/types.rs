use std::path::PathBuf;

/// Result of one full warehouse run.
#[derive(Debug)]
pub struct RunResult {
    pub output_root: PathBuf,
    pub tables: Vec<TableSummary>,
    pub has_errors: bool,
}

/// Outcome of one table's build-and-materialize step.
#[derive(Debug)]
pub struct TableSummary {
    pub name: &'static str,
    pub rows: usize,
    pub partitioned_by: Option<&'static str>,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}
