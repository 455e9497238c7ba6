//! Persisted record types and list filters.

use chrono::{DateTime, Utc};
use nomos_config::{CloudProvider, Environment, ResourceType};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;

/// A name that has been issued and is held in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    pub id: i64,
    pub name: String,
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,
    pub created_at: DateTime<Utc>,
}

/// A name record before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNameRecord {
    pub name: String,
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,
}

impl NewNameRecord {
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            name: name.into(),
            resource_type,
            environment: None,
            cloud_provider: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_cloud_provider(mut self, cloud_provider: CloudProvider) -> Self {
        self.cloud_provider = Some(cloud_provider);
        self
    }
}

impl From<NameRecord> for NewNameRecord {
    fn from(record: NameRecord) -> Self {
        Self {
            name: record.name,
            resource_type: record.resource_type,
            environment: record.environment,
            cloud_provider: record.cloud_provider,
        }
    }
}

/// Field changes for an existing name record. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecordUpdate {
    pub name: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub environment: Option<Environment>,
    pub cloud_provider: Option<CloudProvider>,
}

/// Filter for listing name records. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameRecordFilter {
    pub resource_type: Option<ResourceType>,
    pub cloud_provider: Option<CloudProvider>,
    pub environment: Option<Environment>,
}

impl NameRecordFilter {
    pub fn matches(&self, record: &NameRecord) -> bool {
        self.resource_type.map_or(true, |r| r == record.resource_type)
            && self
                .cloud_provider
                .map_or(true, |p| Some(p) == record.cloud_provider)
            && self
                .environment
                .map_or(true, |e| Some(e) == record.environment)
    }
}

/// Filter for listing saved naming configs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigFilter {
    pub resource_type: Option<ResourceType>,
    pub cloud_provider: Option<CloudProvider>,
}

impl ConfigFilter {
    pub fn matches(&self, config: &nomos_config::NamingConfig) -> bool {
        self.resource_type.map_or(true, |r| r == config.resource_type)
            && self
                .cloud_provider
                .map_or(true, |p| Some(p) == config.cloud_provider)
    }
}
