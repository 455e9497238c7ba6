//! Wiring of the naming engine over the in-memory stores.
//!
//! Each CLI run loads the stores from [`AppConfig`], executes one command
//! and, when the command changed something, writes the stores back.

use nomos_core::{
    seed_catalog, BestPracticeResolver, ConfigFilter, ConfigLibrary, InMemoryBestPracticeCatalog,
    InMemoryConfigStore, InMemoryNameRecordStore, NameRecordFilter, NameRegistry, NamingEngine,
};
use std::sync::Arc;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;

/// The engine, registry and config library of one CLI run.
pub struct Backend {
    pub engine: NamingEngine,
    pub registry: NameRegistry,
    pub library: ConfigLibrary,
}

impl Backend {
    /// Build the stores from `config`.
    ///
    /// Operator rules are loaded before the built-in table is seeded, so an
    /// operator rule replaces the built-in rule with the same key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when `[[names]]` holds the same name twice.
    pub async fn open(config: &AppConfig) -> Result<Self, Error> {
        let catalog = Arc::new(InMemoryBestPracticeCatalog::new());
        let operator_rules = seed_catalog(catalog.as_ref(), &config.rules).await;
        debug!(operator_rules, "Loaded operator rules");

        let resolver = BestPracticeResolver::with_builtin_defaults(catalog.clone());
        seed_catalog(catalog.as_ref(), resolver.defaults()).await;

        let names = InMemoryNameRecordStore::with_records(config.names.clone())
            .map_err(|e| Error::Config(format!("Invalid [[names]] section: {}", e)))?;
        let names = Arc::new(names);
        let configs = Arc::new(InMemoryConfigStore::with_configs(config.configs.clone()));

        Ok(Self {
            engine: NamingEngine::new(resolver, names.clone(), configs.clone()),
            registry: NameRegistry::new(names),
            library: ConfigLibrary::new(configs),
        })
    }

    /// Copy the current names and configs into `config`, ordered by id.
    ///
    /// `config.rules` is left alone; it only ever holds operator rules.
    pub async fn snapshot(&self, config: &mut AppConfig) -> Result<(), Error> {
        let mut names = self.registry.list(&NameRecordFilter::default()).await?;
        names.sort_by_key(|record| record.id);

        let mut configs = self.library.list(&ConfigFilter::default()).await?;
        configs.sort_by_key(|saved| saved.id);

        config.names = names;
        config.configs = configs;
        Ok(())
    }
}
