//! Best-practice rule lookup with fallback to the built-in table.

use nomos_config::{builtin_rules, BestPracticeRule, CloudProvider, ResourceType};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{BestPracticeCatalog, StoreResult};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Resolves the rule for a (provider, resource type) pair.
///
/// The catalog is always consulted first. The default table only answers when
/// the catalog has nothing, so catalog rows shadow built-ins with the same key.
pub struct BestPracticeResolver {
    catalog: Arc<dyn BestPracticeCatalog>,
    defaults: Vec<BestPracticeRule>,
}

impl BestPracticeResolver {
    pub fn new(catalog: Arc<dyn BestPracticeCatalog>, mut defaults: Vec<BestPracticeRule>) -> Self {
        defaults.sort_by_key(|rule| rule.key());
        Self { catalog, defaults }
    }

    /// Create a resolver that falls back to [`builtin_rules`].
    pub fn with_builtin_defaults(catalog: Arc<dyn BestPracticeCatalog>) -> Self {
        Self::new(catalog, builtin_rules())
    }

    /// Find the rule for `provider` and `resource_type`.
    ///
    /// Returns `Ok(None)` when neither the catalog nor the defaults know the
    /// pair. Catalog errors are returned as-is.
    pub async fn resolve(
        &self,
        provider: CloudProvider,
        resource_type: ResourceType,
    ) -> StoreResult<Option<BestPracticeRule>> {
        if let Some(rule) = self.catalog.find_rule(provider, resource_type).await? {
            return Ok(Some(rule));
        }

        let fallback = self
            .defaults
            .iter()
            .find(|rule| rule.key() == (provider, resource_type))
            .cloned();
        debug!(
            provider = %provider,
            resource_type = %resource_type,
            found = fallback.is_some(),
            "Rule not in catalog, using built-in default"
        );
        Ok(fallback)
    }

    /// All rules, ordered by provider then resource type.
    pub async fn list_all(&self) -> StoreResult<Vec<BestPracticeRule>> {
        let rules = self.catalog.list_all().await?;
        if !rules.is_empty() {
            return Ok(rules);
        }

        debug!("Rule catalog is empty, listing built-in defaults");
        Ok(self.defaults.clone())
    }

    /// Rules of one provider, ordered by resource type.
    pub async fn list_by_provider(
        &self,
        provider: CloudProvider,
    ) -> StoreResult<Vec<BestPracticeRule>> {
        let rules = self.catalog.list_by_provider(provider).await?;
        if !rules.is_empty() {
            return Ok(rules);
        }

        debug!(provider = %provider, "No catalog rules for provider, listing built-in defaults");
        Ok(self
            .defaults
            .iter()
            .filter(|rule| rule.provider == provider)
            .cloned()
            .collect())
    }

    pub fn defaults(&self) -> &[BestPracticeRule] {
        &self.defaults
    }
}

/// Insert every rule of `defaults` that the catalog does not hold yet.
///
/// Existing rows are never overwritten, so seeding is idempotent and keeps
/// operator edits. A rule that fails to insert is logged and skipped.
/// Returns the number of rules inserted.
pub async fn seed_catalog(catalog: &dyn BestPracticeCatalog, defaults: &[BestPracticeRule]) -> usize {
    let mut inserted = 0;
    for rule in defaults {
        match catalog.insert_if_absent(rule.clone()).await {
            Ok(true) => inserted += 1,
            Ok(false) => {}
            Err(e) => warn!(
                provider = %rule.provider,
                resource_type = %rule.resource_type,
                error = %e,
                "Failed to seed best-practice rule"
            ),
        }
    }

    info!(
        inserted,
        total = defaults.len(),
        "Best-practice catalog seeded"
    );
    inserted
}
