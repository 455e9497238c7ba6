//! `nomos rules`: inspect best-practice rules.

use clap::Subcommand;
use nomos_config::{CloudProvider, ResourceType};
use nomos_core::NamingError;
use tracing::instrument;

use super::render;
use crate::backend::Backend;
use crate::errors::Error;

#[cfg(test)]
#[path = "rules_cmd_tests.rs"]
mod tests;

/// Subcommands for the rules command
#[derive(Subcommand, Debug, Clone)]
pub enum RulesCommands {
    /// List rules, optionally for one provider
    List {
        #[arg(short, long)]
        provider: Option<CloudProvider>,
    },

    /// Show the rule for one provider and resource type
    Show {
        #[arg(short, long)]
        provider: CloudProvider,

        #[arg(short = 't', long)]
        resource_type: ResourceType,
    },
}

/// Execute the rules command
#[instrument(skip(backend))]
pub async fn execute(cmd: &RulesCommands, backend: &Backend) -> Result<String, Error> {
    let resolver = backend.engine.resolver();
    match cmd {
        RulesCommands::List { provider: None } => {
            render(&resolver.list_all().await.map_err(NamingError::from)?)
        }
        RulesCommands::List {
            provider: Some(provider),
        } => render(
            &resolver
                .list_by_provider(*provider)
                .await
                .map_err(NamingError::from)?,
        ),
        RulesCommands::Show {
            provider,
            resource_type,
        } => match resolver
            .resolve(*provider, *resource_type)
            .await
            .map_err(NamingError::from)?
        {
            Some(rule) => render(&rule),
            None => Err(Error::NotFound(format!(
                "no rule for {} {}",
                provider, resource_type
            ))),
        },
    }
}
