//! `nomos validate`: check a name against provider rules and issued names.

use clap::Args;
use nomos_config::{CloudProvider, ResourceType};
use nomos_core::ValidateNameRequest;
use tracing::{info, instrument};

use super::render;
use crate::backend::Backend;
use crate::errors::Error;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Name to check
    pub name: String,

    /// Resource type the name is for
    #[arg(short = 't', long)]
    pub resource_type: ResourceType,

    /// Cloud provider whose rule applies; without it only duplicates are checked
    #[arg(short, long)]
    pub provider: Option<CloudProvider>,
}

/// Execute the validate command
#[instrument(skip(backend))]
pub async fn execute(args: &ValidateArgs, backend: &Backend) -> Result<String, Error> {
    let request = ValidateNameRequest {
        name: args.name.clone(),
        resource_type: args.resource_type,
        cloud_provider: args.provider,
        config_id: None,
    };
    request.ensure_well_formed()?;

    let response = backend.engine.validate(&request).await?;
    info!(valid = response.valid, "Validation finished");

    render(&response)
}
