//! Request and response types of the generate and validate operations.
//!
//! Field names serialise in camelCase so the types can be exchanged with
//! outer layers unchanged.

use nomos_config::{CloudProvider, Environment, NamingConfig, NamingConfigOverride, ResourceType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{NamingError, NamingResult};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Request to generate candidate names.
///
/// # Examples
///
/// ```
/// use nomos_config::{CloudProvider, ResourceType};
/// use nomos_core::GenerateNameRequest;
///
/// let request = GenerateNameRequest::new(ResourceType::Vm)
///     .with_cloud_provider(CloudProvider::Azure)
///     .with_component("env", "prod")
///     .with_component("resource", "vm");
///
/// assert_eq!(request.components.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameRequest {
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Runtime value per component name. `instance` is overwritten during
    /// generation.
    #[serde(default)]
    pub components: HashMap<String, String>,
    /// Saved config to use when no `custom_config` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_config: Option<NamingConfigOverride>,
}

impl GenerateNameRequest {
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            cloud_provider: None,
            environment: None,
            components: HashMap::new(),
            config_id: None,
            custom_config: None,
        }
    }

    pub fn with_cloud_provider(mut self, cloud_provider: CloudProvider) -> Self {
        self.cloud_provider = Some(cloud_provider);
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_component(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(name.into(), value.into());
        self
    }

    pub fn with_config_id(mut self, config_id: i64) -> Self {
        self.config_id = Some(config_id);
        self
    }

    pub fn with_custom_config(mut self, custom_config: NamingConfigOverride) -> Self {
        self.custom_config = Some(custom_config);
        self
    }

    /// Reject structurally broken requests before they reach the engine.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidInput` for a blank component key or a
    /// non-positive `configId`.
    pub fn ensure_well_formed(&self) -> NamingResult<()> {
        if self.components.keys().any(|key| key.trim().is_empty()) {
            return Err(NamingError::invalid_input(
                "components",
                "component names must not be empty",
            ));
        }

        if let Some(id) = self.config_id {
            if id <= 0 {
                return Err(NamingError::invalid_input(
                    "configId",
                    format!("must be positive, got {id}"),
                ));
            }
        }

        Ok(())
    }
}

/// Result of a generate call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNameResponse {
    /// Accepted candidates in instance order, or the base name alone when
    /// every candidate was taken.
    pub names: Vec<String>,
    /// The effective config used for assembly.
    pub config: NamingConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Request to check a name against provider rules and issued names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameRequest {
    pub name: String,
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,
    /// Accepted for wire compatibility; validation does not consult it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<i64>,
}

impl ValidateNameRequest {
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            name: name.into(),
            resource_type,
            cloud_provider: None,
            config_id: None,
        }
    }

    pub fn with_cloud_provider(mut self, cloud_provider: CloudProvider) -> Self {
        self.cloud_provider = Some(cloud_provider);
        self
    }

    /// Reject a request without a name.
    pub fn ensure_well_formed(&self) -> NamingResult<()> {
        if self.name.is_empty() {
            return Err(NamingError::invalid_input("name", "name is required"));
        }
        Ok(())
    }
}

/// Result of a validate call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameResponse {
    /// `true` exactly when `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub is_duplicate: bool,
}
