//! Classification enums shared by every naming layer.
//!
//! Each enum serialises to the wire strings used by stored records and
//! request payloads (`on-premise`, `resource-group`, ...), and parses from the
//! same strings through [`FromStr`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

/// Hosting platform a resource belongs to.
///
/// Ordered by wire string, like [`ResourceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudProvider {
    Azure,
    Aws,
    Gcp,
    OnPremise,
}

impl CloudProvider {
    /// Every provider, in catalog order.
    pub const ALL: [CloudProvider; 4] = [
        CloudProvider::Azure,
        CloudProvider::Aws,
        CloudProvider::Gcp,
        CloudProvider::OnPremise,
    ];

    /// Wire representation of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Azure => "azure",
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
            CloudProvider::OnPremise => "on-premise",
        }
    }
}

impl PartialOrd for CloudProvider {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CloudProvider {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> ConfigurationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigurationError::unknown_variant("cloud provider", s))
    }
}

/// Deployment stage a resource is named for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Dev,
        Environment::Test,
        Environment::Staging,
        Environment::Prod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> ConfigurationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ConfigurationError::unknown_variant("environment", s))
    }
}

/// Category of infrastructure object being named.
///
/// Ordering follows the wire string so that listings sorted by resource type
/// match the alphabetical order operators see in stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Vm,
    Storage,
    Network,
    Database,
    LoadBalancer,
    Firewall,
    Vpn,
    Client,
    Server,
    Hardware,
    ResourceGroup,
    Function,
    Container,
    Kubernetes,
    Other,
}

impl ResourceType {
    pub const ALL: [ResourceType; 15] = [
        ResourceType::Vm,
        ResourceType::Storage,
        ResourceType::Network,
        ResourceType::Database,
        ResourceType::LoadBalancer,
        ResourceType::Firewall,
        ResourceType::Vpn,
        ResourceType::Client,
        ResourceType::Server,
        ResourceType::Hardware,
        ResourceType::ResourceGroup,
        ResourceType::Function,
        ResourceType::Container,
        ResourceType::Kubernetes,
        ResourceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Vm => "vm",
            ResourceType::Storage => "storage",
            ResourceType::Network => "network",
            ResourceType::Database => "database",
            ResourceType::LoadBalancer => "load-balancer",
            ResourceType::Firewall => "firewall",
            ResourceType::Vpn => "vpn",
            ResourceType::Client => "client",
            ResourceType::Server => "server",
            ResourceType::Hardware => "hardware",
            ResourceType::ResourceGroup => "resource-group",
            ResourceType::Function => "function",
            ResourceType::Container => "container",
            ResourceType::Kubernetes => "kubernetes",
            ResourceType::Other => "other",
        }
    }
}

impl PartialOrd for ResourceType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResourceType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> ConfigurationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigurationError::unknown_variant("resource type", s))
    }
}
