//! Configuration file handling for the Nomos CLI.
//!
//! The CLI keeps all of its state in one TOML file (`nomos.toml` in the
//! current directory unless `--config` says otherwise):
//!
//! - `[[rules]]` operator-maintained best-practice rules, which take
//!   precedence over the built-in table
//! - `[[names]]` issued names
//! - `[[configs]]` saved naming configurations
//!
//! # Example TOML Configuration
//!
//! ```toml
//! [[rules]]
//! provider = "azure"
//! resourceType = "vm"
//! maxLength = 15
//! allowedChars = "a-z0-9-"
//! recommendedComponents = ["env", "location", "resource", "instance"]
//! separator = "-"
//! caseStyle = "lowercase"
//!
//! [[names]]
//! id = 1
//! name = "prod-weu-vm-01"
//! resourceType = "vm"
//! cloudProvider = "azure"
//! createdAt = "2024-05-01T09:30:00Z"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use nomos_config::{BestPracticeRule, NamingConfig};
use nomos_core::NameRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "nomos.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Everything the CLI persists between runs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rules: Vec<BestPracticeRule>,

    #[serde(default)]
    pub names: Vec<NameRecord>,

    #[serde(default)]
    pub configs: Vec<NamingConfig>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read or
    /// does not parse.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields an empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, starting empty", path);
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file, creating parent directories
    /// as needed and overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

/// Resolve the configuration path, defaulting to `nomos.toml` in the current directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
