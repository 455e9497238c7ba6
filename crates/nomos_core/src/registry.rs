//! Explicit persistence of issued names.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::{
    NameRecord, NameRecordFilter, NameRecordStore, NameRecordUpdate, NamingError, NamingResult,
    NewNameRecord, StoreError,
};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Outcome of writing a name to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Registration {
    Registered(NameRecord),
    /// Another record already holds the name. Nothing was written.
    NameTaken { name: String },
}

impl Registration {
    pub fn is_registered(&self) -> bool {
        matches!(self, Registration::Registered(_))
    }
}

/// Issues, edits and withdraws names in the record store.
///
/// Two callers may both see a name as free and then both try to register it.
/// The store's uniqueness constraint decides; the loser gets
/// [`Registration::NameTaken`] rather than an error.
pub struct NameRegistry {
    store: Arc<dyn NameRecordStore>,
}

impl NameRegistry {
    pub fn new(store: Arc<dyn NameRecordStore>) -> Self {
        Self { store }
    }

    /// Record `record.name` as issued.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidInput` for an empty name, and
    /// `NamingError::Store` for any store failure other than a uniqueness
    /// violation.
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn register(&self, record: NewNameRecord) -> NamingResult<Registration> {
        if record.name.trim().is_empty() {
            return Err(NamingError::invalid_input("name", "name is required"));
        }

        match self.store.insert(record).await {
            Ok(stored) => {
                info!(id = stored.id, "Name registered");
                Ok(Registration::Registered(stored))
            }
            Err(StoreError::UniqueViolation { name }) => {
                debug!("Name already registered");
                Ok(Registration::NameTaken { name })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Change an issued name. Fields absent from `changes` keep their value.
    ///
    /// The record is re-created, so the result carries a new id and creation
    /// time. Returns `Ok(None)` when no record has `id`. A rename onto a name
    /// held by another record leaves the original untouched. When the store
    /// rejects the replacement, the original is put back before the error
    /// is returned.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        id: i64,
        changes: NameRecordUpdate,
    ) -> NamingResult<Option<Registration>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let replacement = NewNameRecord {
            name: changes
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| existing.name.clone()),
            resource_type: changes.resource_type.unwrap_or(existing.resource_type),
            environment: changes.environment.or(existing.environment),
            cloud_provider: changes.cloud_provider.or(existing.cloud_provider),
        };

        if replacement.name != existing.name {
            if let Some(holder) = self.store.find_by_name(&replacement.name).await? {
                debug!(holder = holder.id, "Rename target already registered");
                return Ok(Some(Registration::NameTaken {
                    name: replacement.name,
                }));
            }
        }

        self.store.delete_by_id(id).await?;
        let failure = match self.store.insert(replacement).await {
            Ok(stored) => return Ok(Some(Registration::Registered(stored))),
            Err(e) => e,
        };

        // The old record goes back whatever stopped the replacement.
        if let Err(restore) = self.store.insert(NewNameRecord::from(existing)).await {
            error!(error = %restore, "Failed to restore record after rejected update");
        }
        match failure {
            StoreError::UniqueViolation { name } => Ok(Some(Registration::NameTaken { name })),
            e => Err(e.into()),
        }
    }

    pub async fn get(&self, id: i64) -> NamingResult<Option<NameRecord>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Issued names matching `filter`, newest first.
    pub async fn list(&self, filter: &NameRecordFilter) -> NamingResult<Vec<NameRecord>> {
        Ok(self.store.list(filter).await?)
    }

    pub async fn remove_by_id(&self, id: i64) -> NamingResult<bool> {
        Ok(self.store.delete_by_id(id).await?)
    }

    pub async fn remove_by_name(&self, name: &str) -> NamingResult<bool> {
        Ok(self.store.delete_by_name(name).await?)
    }
}
