//! Saved naming configurations.

use nomos_config::{ConfigurationError, NamingConfig};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{ConfigFilter, ConfigStore, NamingError, NamingResult};

#[cfg(test)]
#[path = "config_library_tests.rs"]
mod tests;

/// Create, read, update and delete operations over saved configs.
pub struct ConfigLibrary {
    store: Arc<dyn ConfigStore>,
}

impl ConfigLibrary {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Save `config` under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidInput` for a blank name and
    /// `NamingError::Configuration` for other unusable values.
    #[instrument(skip(self, config), fields(name = %config.name))]
    pub async fn save(&self, config: NamingConfig) -> NamingResult<NamingConfig> {
        check_storable(&config)?;
        let saved = self.store.insert(config).await?;
        info!(id = ?saved.id, "Naming config saved");
        Ok(saved)
    }

    pub async fn get(&self, id: i64) -> NamingResult<Option<NamingConfig>> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Saved configs matching `filter`, defaults first then newest first.
    pub async fn list(&self, filter: &ConfigFilter) -> NamingResult<Vec<NamingConfig>> {
        Ok(self.store.list(filter).await?)
    }

    /// Replace the config stored under `id`. Returns `Ok(None)` for an unknown id.
    #[instrument(skip(self, config), fields(name = %config.name))]
    pub async fn update(&self, id: i64, config: NamingConfig) -> NamingResult<Option<NamingConfig>> {
        check_storable(&config)?;
        Ok(self.store.update(id, config).await?)
    }

    pub async fn remove(&self, id: i64) -> NamingResult<bool> {
        Ok(self.store.delete_by_id(id).await?)
    }
}

fn check_storable(config: &NamingConfig) -> NamingResult<()> {
    config.ensure_storable().map_err(|e| match e {
        ConfigurationError::RequiredFieldMissing { field } => {
            NamingError::invalid_input(field, "is required")
        }
        other => NamingError::Configuration(other),
    })
}
