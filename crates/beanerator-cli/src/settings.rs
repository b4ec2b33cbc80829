//! Locating and loading `beanerator.toml`

use anyhow::{Context, Result};
use beanerator_core::GeneratorConfig;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "beanerator.toml";

/// Load the explicit config, else `./beanerator.toml`, else the defaults.
pub fn load(explicit: Option<&str>) -> Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => DEFAULT_CONFIG_FILE,
        None => return Ok(GeneratorConfig::default()),
    };

    GeneratorConfig::from_file(path).with_context(|| format!("Failed to load config: {path}"))
}

/// Name of the config source, for the startup log line.
pub fn describe(explicit: Option<&str>) -> &str {
    match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => DEFAULT_CONFIG_FILE,
        None => "built-in defaults",
    }
}
