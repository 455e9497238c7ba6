//! Naming templates.
//!
//! A [`NamingConfig`] describes how a name is assembled: which components
//! appear and in which order, how they are joined, and which casing and
//! length limit apply to the result. [`NamingConfigOverride`] is the partial
//! form a caller supplies to adjust a synthesised default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    CaseStyle, CloudProvider, ConfigurationError, ConfigurationResult, Environment, ResourceType,
};

#[cfg(test)]
#[path = "naming_config_tests.rs"]
mod tests;

/// One named slot in a naming template, e.g. `env` or `location`.
///
/// `value` is supplied at generation time and is not part of a saved template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingComponent {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Hint for forms and validation; assembly skips missing values either way.
    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Character-class body; characters outside it are stripped from the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_chars: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl NamingComponent {
    /// Create a component with no per-value constraints.
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_allowed_chars(mut self, allowed_chars: impl Into<String>) -> Self {
        self.allowed_chars = Some(allowed_chars.into());
        self
    }
}

/// A complete naming template.
///
/// `components` is kept as an ordered list through every serialisation; the
/// order is the assembly order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub resource_type: ResourceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    #[serde(default)]
    pub components: Vec<NamingComponent>,

    #[serde(default)]
    pub separator: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_length: Option<usize>,

    #[serde(default)]
    pub case_style: CaseStyle,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NamingConfig {
    /// Check the fields a store requires before persisting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::RequiredFieldMissing` for a blank label and
    /// `ConfigurationError::InvalidValue` for a zero length limit or a
    /// component without a name.
    pub fn ensure_storable(&self) -> ConfigurationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::required("name"));
        }

        if self.max_total_length == Some(0) {
            return Err(ConfigurationError::InvalidValue {
                field: "maxTotalLength".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        for (index, component) in self.components.iter().enumerate() {
            if component.name.is_empty() {
                return Err(ConfigurationError::InvalidValue {
                    field: format!("components[{}].name", index),
                    reason: "component name cannot be empty".to_string(),
                });
            }
            if component.max_length == Some(0) {
                return Err(ConfigurationError::InvalidValue {
                    field: format!("components[{}].maxLength", index),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Look up a component definition by name.
    pub fn component(&self, name: &str) -> Option<&NamingComponent> {
        self.components.iter().find(|c| c.name == name)
    }
}

/// Caller-supplied adjustments to a synthesised config.
///
/// Every field is optional; a present field replaces the synthesised value
/// during [`merge`](crate::merge). `resource_type` is accepted for payload
/// compatibility but the requested resource type always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<NamingComponent>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_length: Option<usize>,

    /// An empty string counts as absent.
    #[serde(
        default,
        deserialize_with = "case_style_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub case_style: Option<CaseStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn case_style_or_none<'de, D>(deserializer: D) -> Result<Option<CaseStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(CaseStyle::from))
}

impl From<NamingConfig> for NamingConfigOverride {
    /// Every field of a saved config becomes an explicit override.
    fn from(config: NamingConfig) -> Self {
        Self {
            id: config.id,
            name: Some(config.name),
            resource_type: Some(config.resource_type),
            cloud_provider: config.cloud_provider,
            environment: config.environment,
            components: Some(config.components),
            separator: Some(config.separator),
            prefix: config.prefix,
            suffix: config.suffix,
            max_total_length: config.max_total_length,
            case_style: Some(config.case_style),
            is_default: Some(config.is_default),
            created_at: config.created_at,
        }
    }
}
