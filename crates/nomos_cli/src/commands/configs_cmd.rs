//! `nomos configs`: saved naming configurations.
//!
//! A saved config can be referenced from `nomos generate --config-id`.

use std::{fs, path::PathBuf};

use clap::Subcommand;
use nomos_config::{CloudProvider, NamingConfig, ResourceType};
use nomos_core::ConfigFilter;
use serde_json::json;
use tracing::{info, instrument};

use super::render;
use crate::backend::Backend;
use crate::errors::Error;

#[cfg(test)]
#[path = "configs_cmd_tests.rs"]
mod tests;

/// Subcommands for the configs command
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigsCommands {
    /// List saved configs, defaults first
    List {
        #[arg(short = 't', long)]
        resource_type: Option<ResourceType>,

        #[arg(short, long)]
        provider: Option<CloudProvider>,
    },

    /// Show one saved config
    Show { id: i64 },

    /// Save a naming config read from a JSON file
    Add {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Delete a saved config
    Remove { id: i64 },
}

impl ConfigsCommands {
    /// Whether the command changes the saved configs.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            ConfigsCommands::Add { .. } | ConfigsCommands::Remove { .. }
        )
    }
}

/// Execute the configs command
#[instrument(skip(backend))]
pub async fn execute(cmd: &ConfigsCommands, backend: &Backend) -> Result<String, Error> {
    match cmd {
        ConfigsCommands::List {
            resource_type,
            provider,
        } => {
            let filter = ConfigFilter {
                resource_type: *resource_type,
                cloud_provider: *provider,
            };
            render(&backend.library.list(&filter).await?)
        }
        ConfigsCommands::Show { id } => match backend.library.get(*id).await? {
            Some(config) => render(&config),
            None => Err(Error::NotFound(format!("config {}", id))),
        },
        ConfigsCommands::Add { file } => {
            let content = fs::read_to_string(file).map_err(|e| {
                Error::InvalidArguments(format!("Failed to read {:?}: {}", file, e))
            })?;
            let config: NamingConfig = serde_json::from_str(&content).map_err(|e| {
                Error::InvalidArguments(format!("Failed to parse {:?}: {}", file, e))
            })?;

            let saved = backend.library.save(config).await?;
            info!(id = ?saved.id, "Config saved");
            render(&saved)
        }
        ConfigsCommands::Remove { id } => {
            if !backend.library.remove(*id).await? {
                return Err(Error::NotFound(format!("config {}", id)));
            }
            render(&json!({ "removed": true }))
        }
    }
}
