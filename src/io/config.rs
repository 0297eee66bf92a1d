use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::params::SolverConfig;
use crate::error::{Error, Result};

/// Load solver settings from a TOML or JSON file, chosen by extension.
///
/// Fields left out of the file keep their `SolverConfig::default()` values.
pub fn load_solver_config(path: &Path) -> Result<SolverConfig> {
    let content = fs::read_to_string(path).map_err(|e| Error::config(path, e))?;

    let config: SolverConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| Error::config(path, e))?,
        Some("json") => serde_json::from_str(&content).map_err(|e| Error::config(path, e))?,
        other => {
            return Err(Error::config(
                path,
                format!("unsupported config format: {}", other.unwrap_or("<none>")),
            ));
        }
    };

    info!("Loaded solver configuration from {:?}", path);
    Ok(config)
}
