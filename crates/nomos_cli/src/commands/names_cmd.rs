//! `nomos names`: the registry of issued names.
//!
//! ```bash
//! nomos names list --provider azure
//! nomos names add prod-weu-vm-01 -t vm -p azure -e prod
//! nomos names remove --name prod-weu-vm-01
//! ```

use clap::Subcommand;
use nomos_config::{CloudProvider, Environment, ResourceType};
use nomos_core::{NameRecordFilter, NewNameRecord, Registration};
use serde_json::json;
use tracing::{info, instrument};

use super::render;
use crate::backend::Backend;
use crate::errors::Error;

#[cfg(test)]
#[path = "names_cmd_tests.rs"]
mod tests;

/// Subcommands for the names command
#[derive(Subcommand, Debug, Clone)]
pub enum NamesCommands {
    /// List issued names, newest first
    List {
        #[arg(short = 't', long)]
        resource_type: Option<ResourceType>,

        #[arg(short, long)]
        provider: Option<CloudProvider>,

        #[arg(short, long)]
        environment: Option<Environment>,
    },

    /// Register a name as issued
    Add {
        name: String,

        #[arg(short = 't', long)]
        resource_type: ResourceType,

        #[arg(short, long)]
        provider: Option<CloudProvider>,

        #[arg(short, long)]
        environment: Option<Environment>,
    },

    /// Withdraw an issued name
    Remove {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<i64>,

        #[arg(long)]
        name: Option<String>,
    },
}

impl NamesCommands {
    /// Whether the command changes the registry.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, NamesCommands::List { .. })
    }
}

/// Execute the names command
#[instrument(skip(backend))]
pub async fn execute(cmd: &NamesCommands, backend: &Backend) -> Result<String, Error> {
    match cmd {
        NamesCommands::List {
            resource_type,
            provider,
            environment,
        } => {
            let filter = NameRecordFilter {
                resource_type: *resource_type,
                cloud_provider: *provider,
                environment: *environment,
            };
            render(&backend.registry.list(&filter).await?)
        }
        NamesCommands::Add {
            name,
            resource_type,
            provider,
            environment,
        } => {
            let record = NewNameRecord {
                name: name.clone(),
                resource_type: *resource_type,
                environment: *environment,
                cloud_provider: *provider,
            };
            match backend.registry.register(record).await? {
                Registration::Registered(stored) => {
                    info!(id = stored.id, name = %stored.name, "Name registered");
                    render(&stored)
                }
                Registration::NameTaken { name } => Err(Error::NameTaken(name)),
            }
        }
        NamesCommands::Remove { id, name } => {
            let removed = match (id, name) {
                (Some(id), _) => backend.registry.remove_by_id(*id).await?,
                (None, Some(name)) => backend.registry.remove_by_name(name).await?,
                (None, None) => {
                    return Err(Error::InvalidArguments(
                        "either --id or --name is required".to_string(),
                    ))
                }
            };
            if !removed {
                return Err(Error::NotFound(match (id, name) {
                    (Some(id), _) => format!("name record {}", id),
                    (None, name) => format!("name '{}'", name.as_deref().unwrap_or_default()),
                }));
            }
            render(&json!({ "removed": true }))
        }
    }
}
