//! Generation and validation orchestration.

use nomos_config::{
    from_best_practice, merge, BestPracticeRule, CaseStyle, CloudProvider, NamingConfig,
    NamingConfigOverride, ResourceType,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::{
    assemble, BestPracticeResolver, ConfigStore, GenerateNameRequest, GenerateNameResponse,
    NameRecordStore, NamingResult, StoreResult, ValidateNameRequest, ValidateNameResponse,
};

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

/// Number of instance-numbered candidates tried per generate call.
pub const CANDIDATE_COUNT: u32 = 5;

/// Component that receives the candidate counter.
const INSTANCE_COMPONENT: &str = "instance";

/// Generates and validates resource names.
///
/// The engine holds no mutable state of its own. Every request reads the rule
/// catalog and the record store, and generation never writes; issuing a name
/// is a separate step through [`NameRegistry`](crate::NameRegistry).
pub struct NamingEngine {
    resolver: BestPracticeResolver,
    names: Arc<dyn NameRecordStore>,
    configs: Arc<dyn ConfigStore>,
}

impl NamingEngine {
    pub fn new(
        resolver: BestPracticeResolver,
        names: Arc<dyn NameRecordStore>,
        configs: Arc<dyn ConfigStore>,
    ) -> Self {
        Self {
            resolver,
            names,
            configs,
        }
    }

    pub fn resolver(&self) -> &BestPracticeResolver {
        &self.resolver
    }

    /// Produce up to [`CANDIDATE_COUNT`] unused names.
    ///
    /// Candidates are assembled with `instance` set to `01` through `05`, in
    /// that order. A candidate already held by the record store is dropped
    /// with a warning. If all are taken the name assembled from the caller's
    /// own values is returned alone, with a warning.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Store` when the catalog, the config store or the
    /// record store fails.
    #[instrument(skip(self, request), fields(resource_type = %request.resource_type, cloud_provider = ?request.cloud_provider))]
    pub async fn generate(&self, request: &GenerateNameRequest) -> NamingResult<GenerateNameResponse> {
        let mut warnings = Vec::new();

        let rule = self.resolve_rule(request.cloud_provider, request.resource_type).await?;
        let config = self.effective_config(request, rule.as_ref(), &mut warnings).await?;

        let base_name = assemble(&config, &request.components);

        let mut values = request.components.clone();
        let mut names = Vec::new();
        for instance in 1..=CANDIDATE_COUNT {
            values.insert(INSTANCE_COMPONENT.to_string(), format!("{instance:02}"));
            let candidate = assemble(&config, &values);

            if self.names.find_by_name(&candidate).await?.is_some() {
                debug!(candidate = %candidate, "Skipping candidate that is already issued");
                warnings.push(format!("Name \"{candidate}\" existiert bereits"));
            } else {
                names.push(candidate);
            }
        }

        if names.is_empty() {
            warn!(base_name = %base_name, "Every generated candidate is already issued");
            names.push(base_name);
            warnings.push("Alle generierten Namen existieren bereits in der Datenbank".to_string());
        }

        Ok(GenerateNameResponse {
            names,
            config,
            warnings,
        })
    }

    /// Check a name against its provider rule and the issued names.
    ///
    /// Without a cloud provider only the duplicate check runs. Rule findings
    /// are reported in the response, never as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Store` when the catalog or the record store fails.
    #[instrument(skip(self, request), fields(name = %request.name, resource_type = %request.resource_type))]
    pub async fn validate(&self, request: &ValidateNameRequest) -> NamingResult<ValidateNameResponse> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let rule = self.resolve_rule(request.cloud_provider, request.resource_type).await?;
        if let Some(rule) = &rule {
            check_against_rule(&request.name, rule, &mut errors, &mut warnings);
        }

        let is_duplicate = self.names.find_by_name(&request.name).await?.is_some();
        if is_duplicate {
            errors.push("Name existiert bereits in der Datenbank".to_string());
        }

        Ok(ValidateNameResponse {
            valid: errors.is_empty(),
            errors,
            warnings,
            is_duplicate,
        })
    }

    async fn resolve_rule(
        &self,
        provider: Option<CloudProvider>,
        resource_type: ResourceType,
    ) -> StoreResult<Option<BestPracticeRule>> {
        match provider {
            Some(provider) => self.resolver.resolve(provider, resource_type).await,
            None => Ok(None),
        }
    }

    /// Pick the config a generate request runs with.
    ///
    /// An explicit custom config wins over `config_id`. A saved config that
    /// cannot be found is reported as a warning and ignored.
    async fn effective_config(
        &self,
        request: &GenerateNameRequest,
        rule: Option<&BestPracticeRule>,
        warnings: &mut Vec<String>,
    ) -> StoreResult<NamingConfig> {
        let custom = match (&request.custom_config, request.config_id) {
            (Some(custom), _) => Some(custom.clone()),
            (None, Some(id)) => match self.configs.get_by_id(id).await? {
                Some(saved) => Some(NamingConfigOverride::from(saved)),
                None => {
                    warn!(config_id = id, "Saved config not found, using best-practice config");
                    warnings.push(format!("Konfiguration {id} nicht gefunden"));
                    None
                }
            },
            (None, None) => None,
        };

        Ok(match custom {
            Some(custom) => merge(custom, rule, request.resource_type),
            None => from_best_practice(rule, request.resource_type, request.cloud_provider),
        })
    }
}

fn check_against_rule(
    name: &str,
    rule: &BestPracticeRule,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if name.chars().count() > rule.max_length {
        errors.push(format!(
            "Name überschreitet maximale Länge von {} Zeichen",
            rule.max_length
        ));
    }

    let allowed = match rule.character_class() {
        Ok(class) => class.matches_entirely(name),
        Err(e) => {
            warn!(
                provider = %rule.provider,
                resource_type = %rule.resource_type,
                error = %e,
                "Rule has an invalid character class, rejecting name"
            );
            false
        }
    };
    if !allowed {
        errors.push(format!(
            "Name enthält nicht erlaubte Zeichen. Erlaubt: {}",
            rule.allowed_chars
        ));
    }

    if rule.case_style == CaseStyle::Lowercase && name != name.to_lowercase() {
        warnings.push("Name sollte in Kleinbuchstaben sein".to_string());
    }
}
