//! Generator configuration

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generation pass, usually read from `beanerator.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory for generated sources
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Package for host types whose name carries none
    #[serde(default)]
    pub default_package: Option<String>,

    /// Generate independent types on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Initial log filter, e.g. `info` or `beanerator_core=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Comment placed at the top of every generated file
    #[serde(default = "default_header")]
    pub header: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_header() -> String {
    "Generated by beanerator. Do not edit.".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_package: None,
            parallel: false,
            log_level: default_log_level(),
            header: default_header(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; an empty document yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
