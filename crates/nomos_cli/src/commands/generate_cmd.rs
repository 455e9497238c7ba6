//! `nomos generate`: produce candidate names.
//!
//! ```bash
//! nomos generate -t vm -p azure -c env=prod -c location=weu -c resource=vm
//! nomos generate -t storage --config-id 3 -c env=dev -c purpose=logs
//! ```

use clap::Args;
use nomos_config::{CloudProvider, Environment, NamingConfigOverride, ResourceType};
use nomos_core::GenerateNameRequest;
use tracing::{debug, instrument};

use super::{parse_key_val, render};
use crate::backend::Backend;
use crate::errors::Error;

#[cfg(test)]
#[path = "generate_cmd_tests.rs"]
mod tests;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Resource type to name (vm, storage, network, ...)
    #[arg(short = 't', long)]
    pub resource_type: ResourceType,

    /// Cloud provider whose best practice applies
    #[arg(short, long)]
    pub provider: Option<CloudProvider>,

    /// Target environment
    #[arg(short, long)]
    pub environment: Option<Environment>,

    /// Component value as KEY=VALUE, repeatable
    #[arg(short, long = "component", value_parser = parse_key_val)]
    pub components: Vec<(String, String)>,

    /// Saved config to build names with
    #[arg(long)]
    pub config_id: Option<i64>,

    /// Partial naming config as JSON, overriding the best practice
    #[arg(long)]
    pub custom_config: Option<String>,
}

impl GenerateArgs {
    fn to_request(&self) -> Result<GenerateNameRequest, Error> {
        let custom_config = self
            .custom_config
            .as_deref()
            .map(serde_json::from_str::<NamingConfigOverride>)
            .transpose()
            .map_err(|e| Error::InvalidArguments(format!("--custom-config: {}", e)))?;

        Ok(GenerateNameRequest {
            resource_type: self.resource_type,
            cloud_provider: self.provider,
            environment: self.environment,
            components: self.components.iter().cloned().collect(),
            config_id: self.config_id,
            custom_config,
        })
    }
}

/// Execute the generate command
#[instrument(skip(backend))]
pub async fn execute(args: &GenerateArgs, backend: &Backend) -> Result<String, Error> {
    let request = args.to_request()?;
    request.ensure_well_formed()?;

    let response = backend.engine.generate(&request).await?;
    debug!(candidates = response.names.len(), "Generated names");

    render(&response)
}
