//! Warehouse run configuration.
//!
//! The original pipeline reached for implicit global path prefixes; here the
//! recognized options are an explicit object passed to every builder:
//! `input_root` (base directory for raw sources) and `output_root` (base
//! directory for derived tables).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory under the input root holding the immigration extracts.
pub const IMMIGRATION_DIR: &str = "immigration";
/// Fixed name of the global city-temperature source file.
pub const TEMPERATURE_FILE: &str = "GlobalLandTemperaturesByCity.csv";
/// Fixed name of the US city demographics source file.
pub const DEMOGRAPHICS_FILE: &str = "us-cities-demographics.csv";

/// Explicit configuration for one warehouse run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Base directory containing the raw sources.
    pub input_root: PathBuf,
    /// Base directory the derived tables are written under.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

/// Default output root when none is configured.
pub fn default_output_root() -> PathBuf {
    PathBuf::from("./output")
}

impl WarehouseConfig {
    /// Creates a configuration from explicit roots.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory the immigration extracts are discovered from.
    pub fn immigration_dir(&self) -> PathBuf {
        self.input_root.join(IMMIGRATION_DIR)
    }

    /// Path of the temperature observations source.
    pub fn temperature_source(&self) -> PathBuf {
        self.input_root.join(TEMPERATURE_FILE)
    }

    /// Path of the demographics source.
    pub fn demographics_source(&self) -> PathBuf {
        self.input_root.join(DEMOGRAPHICS_FILE)
    }

    /// Output directory of a derived table.
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.output_root.join(table)
    }
}
