//! Provider best-practice rules and the built-in rule table.
//!
//! A [`BestPracticeRule`] captures the naming constraints a cloud provider
//! imposes on one resource type, plus a recommended template. The built-in
//! table returned by [`builtin_rules`] seeds the rule catalog and serves as the
//! read-time fallback when the catalog has no entry.

use serde::{Deserialize, Serialize};

use crate::{CaseStyle, CharacterClass, CloudProvider, ConfigurationResult, ResourceType};

#[cfg(test)]
#[path = "best_practice_tests.rs"]
mod tests;

/// Naming constraints for one (provider, resource type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPracticeRule {
    pub provider: CloudProvider,
    pub resource_type: ResourceType,
    pub max_length: usize,
    /// Character-class body, matched case-insensitively.
    pub allowed_chars: String,
    pub recommended_components: Vec<String>,
    pub separator: String,
    pub case_style: CaseStyle,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BestPracticeRule {
    /// The catalog key of this rule.
    pub fn key(&self) -> (CloudProvider, ResourceType) {
        (self.provider, self.resource_type)
    }

    /// Compile `allowed_chars`.
    pub fn character_class(&self) -> ConfigurationResult<CharacterClass> {
        CharacterClass::new(self.allowed_chars.as_str())
    }
}

#[allow(clippy::too_many_arguments)]
fn rule(
    provider: CloudProvider,
    resource_type: ResourceType,
    max_length: usize,
    allowed_chars: &str,
    recommended_components: &[&str],
    separator: &str,
    examples: &[&str],
    notes: &str,
) -> BestPracticeRule {
    BestPracticeRule {
        provider,
        resource_type,
        max_length,
        allowed_chars: allowed_chars.to_string(),
        recommended_components: recommended_components.iter().map(|c| c.to_string()).collect(),
        separator: separator.to_string(),
        case_style: CaseStyle::Lowercase,
        examples: examples.iter().map(|e| e.to_string()).collect(),
        notes: Some(notes.to_string()),
    }
}

/// The built-in best-practice table, one rule per supported pair.
///
/// Built fresh on each call; callers load it once at start-up and pass it to
/// whatever needs it.
pub fn builtin_rules() -> Vec<BestPracticeRule> {
    use CloudProvider::{Aws, Azure, Gcp, OnPremise};
    use ResourceType::*;

    vec![
        rule(
            Azure,
            Vm,
            15,
            "a-z0-9-",
            &["env", "location", "resource", "instance"],
            "-",
            &["prod-weu-vm-web-01", "dev-eus-vm-db-02"],
            "Azure VMs: Max 15 Zeichen, nur Kleinbuchstaben, Zahlen und Bindestriche",
        ),
        rule(
            Azure,
            Storage,
            24,
            "a-z0-9",
            &["env", "location", "resource", "purpose"],
            "",
            &["prodweustorageweb", "devstoragebackup"],
            "Azure Storage Accounts: Max 24 Zeichen, nur Kleinbuchstaben und Zahlen, keine Bindestriche",
        ),
        rule(
            Azure,
            Network,
            80,
            "a-z0-9-_.",
            &["env", "location", "resource", "purpose"],
            "-",
            &["prod-weu-vnet-core", "dev-eus-subnet-frontend"],
            "Azure Netzwerk-Ressourcen: Max 80 Zeichen",
        ),
        rule(
            Azure,
            ResourceGroup,
            90,
            "a-z0-9-_.()",
            &["env", "location", "application", "purpose"],
            "-",
            &["prod-weu-rg-webapp", "dev-eus-rg-testing"],
            "Azure Resource Groups: Max 90 Zeichen",
        ),
        rule(
            Aws,
            Vm,
            255,
            "a-z0-9-",
            &["env", "application", "resource", "instance"],
            "-",
            &["prod-webapp-ec2-01", "dev-api-ec2-02"],
            "AWS EC2: Tags verwenden für bessere Organisation",
        ),
        rule(
            Aws,
            Storage,
            63,
            "a-z0-9-",
            &["env", "application", "purpose"],
            "-",
            &["prod-webapp-logs", "dev-backup-data"],
            "AWS S3 Buckets: Max 63 Zeichen, global eindeutig",
        ),
        rule(
            Aws,
            Network,
            255,
            "a-z0-9-",
            &["env", "application", "resource", "purpose"],
            "-",
            &["prod-webapp-vpc", "dev-api-subnet-public"],
            "AWS Netzwerk-Ressourcen: Tags für Organisation verwenden",
        ),
        rule(
            Aws,
            Database,
            63,
            "a-z0-9-",
            &["env", "application", "purpose"],
            "-",
            &["prod-webapp-db", "dev-api-db"],
            "AWS RDS: Max 63 Zeichen",
        ),
        rule(
            Aws,
            Function,
            64,
            "a-z0-9-_",
            &["env", "application", "purpose"],
            "-",
            &["prod-webapp-process", "dev-api-handler"],
            "AWS Lambda: Max 64 Zeichen",
        ),
        rule(
            Gcp,
            Vm,
            63,
            "a-z0-9-",
            &["env", "application", "resource", "instance"],
            "-",
            &["prod-webapp-vm-01", "dev-api-vm-02"],
            "GCP Compute Engine: Max 63 Zeichen",
        ),
        rule(
            Gcp,
            Storage,
            63,
            "a-z0-9-_.",
            &["env", "application", "purpose"],
            "-",
            &["prod-webapp-logs", "dev-backup-data"],
            "GCP Cloud Storage: Max 63 Zeichen, global eindeutig",
        ),
        rule(
            Gcp,
            Network,
            63,
            "a-z0-9-",
            &["env", "application", "resource", "purpose"],
            "-",
            &["prod-webapp-vpc", "dev-api-subnet"],
            "GCP VPC: Max 63 Zeichen",
        ),
        rule(
            Gcp,
            Database,
            63,
            "a-z0-9-",
            &["env", "application", "purpose"],
            "-",
            &["prod-webapp-db", "dev-api-db"],
            "GCP Cloud SQL: Max 63 Zeichen",
        ),
        rule(
            OnPremise,
            Server,
            15,
            "a-z0-9-",
            &["location", "department", "purpose", "instance"],
            "-",
            &["fra-it-web-01", "muc-hr-files-02"],
            "On-Premise Server: Kurze, prägnante Namen empfohlen",
        ),
        rule(
            OnPremise,
            Network,
            32,
            "a-z0-9-",
            &["location", "purpose", "vlan"],
            "-",
            &["fra-core-vlan10", "muc-guest-vlan20"],
            "On-Premise Netzwerk: VLAN-Nummern können enthalten sein",
        ),
        rule(
            OnPremise,
            Client,
            15,
            "a-z0-9-",
            &["location", "department", "user", "instance"],
            "-",
            &["fra-it-pc-001", "muc-sales-lap-042"],
            "On-Premise Clients: Oft mit Benutzer- oder Abteilungsbezug",
        ),
        rule(
            OnPremise,
            Hardware,
            20,
            "a-z0-9-",
            &["location", "type", "purpose", "instance"],
            "-",
            &["fra-switch-core-01", "muc-router-edge-02"],
            "On-Premise Hardware: Typ und Standort wichtig",
        ),
    ]
}
