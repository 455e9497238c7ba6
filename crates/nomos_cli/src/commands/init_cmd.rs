//! `nomos init`: write a starter configuration file.
//!
//! The file lists the built-in best-practice rules under `[[rules]]` so they
//! can be edited in place.

use std::path::Path;

use nomos_config::builtin_rules;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "init_cmd_tests.rs"]
mod tests;

/// Execute the init command
#[instrument]
pub fn execute(config_path: &Path, force: bool) -> Result<String, Error> {
    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        )));
    }

    let config = AppConfig {
        rules: builtin_rules(),
        ..Default::default()
    };
    config.save(config_path)?;

    info!(path = ?config_path, "Configuration initialized");
    Ok(format!("Configuration initialized at {:?}", config_path))
}
