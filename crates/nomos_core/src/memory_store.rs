//! In-process implementations of the store contracts.
//!
//! These back the CLI (which snapshots them to its TOML file) and the test
//! suites. State lives behind a `tokio::sync::RwLock`, so a store can be
//! shared across tasks through an `Arc`.

use async_trait::async_trait;
use chrono::Utc;
use nomos_config::{BestPracticeRule, CloudProvider, NamingConfig, ResourceType};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{
    BestPracticeCatalog, ConfigFilter, ConfigStore, NameRecord, NameRecordFilter, NameRecordStore,
    NewNameRecord, StoreError, StoreResult,
};

#[cfg(test)]
#[path = "memory_store_tests.rs"]
mod tests;

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Name records held in memory, unique by name.
#[derive(Debug, Default)]
pub struct InMemoryNameRecordStore {
    table: RwLock<Table<NameRecord>>,
}

impl InMemoryNameRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load previously issued records, keeping their ids and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` on the first repeated name.
    pub fn with_records(records: Vec<NameRecord>) -> StoreResult<Self> {
        let mut table = Table::default();
        for record in records {
            if table.rows.iter().any(|r: &NameRecord| r.name == record.name) {
                return Err(StoreError::UniqueViolation { name: record.name });
            }
            table.last_id = table.last_id.max(record.id);
            table.rows.push(record);
        }

        Ok(Self {
            table: RwLock::new(table),
        })
    }
}

#[async_trait]
impl NameRecordStore for InMemoryNameRecordStore {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<NameRecord>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|r| r.name == name).cloned())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<NameRecord>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, record: NewNameRecord) -> StoreResult<NameRecord> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|r| r.name == record.name) {
            return Err(StoreError::UniqueViolation { name: record.name });
        }

        let stored = NameRecord {
            id: table.next_id(),
            name: record.name,
            resource_type: record.resource_type,
            environment: record.environment,
            cloud_provider: record.cloud_provider,
            created_at: Utc::now(),
        };
        table.rows.push(stored.clone());

        Ok(stored)
    }

    async fn list(&self, filter: &NameRecordFilter) -> StoreResult<Vec<NameRecord>> {
        let table = self.table.read().await;
        let mut records: Vec<NameRecord> = table
            .rows
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(records)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.name != name);
        Ok(table.rows.len() < before)
    }
}

/// Best-practice rules held in memory, keyed by (provider, resource type).
#[derive(Debug, Default)]
pub struct InMemoryBestPracticeCatalog {
    rules: RwLock<BTreeMap<(CloudProvider, ResourceType), BestPracticeRule>>,
}

impl InMemoryBestPracticeCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BestPracticeCatalog for InMemoryBestPracticeCatalog {
    async fn find_rule(
        &self,
        provider: CloudProvider,
        resource_type: ResourceType,
    ) -> StoreResult<Option<BestPracticeRule>> {
        let rules = self.rules.read().await;
        Ok(rules.get(&(provider, resource_type)).cloned())
    }

    async fn insert_if_absent(&self, rule: BestPracticeRule) -> StoreResult<bool> {
        let mut rules = self.rules.write().await;
        if rules.contains_key(&rule.key()) {
            return Ok(false);
        }
        rules.insert(rule.key(), rule);
        Ok(true)
    }

    async fn list_all(&self) -> StoreResult<Vec<BestPracticeRule>> {
        let rules = self.rules.read().await;
        Ok(rules.values().cloned().collect())
    }

    async fn list_by_provider(
        &self,
        provider: CloudProvider,
    ) -> StoreResult<Vec<BestPracticeRule>> {
        let rules = self.rules.read().await;
        Ok(rules
            .values()
            .filter(|r| r.provider == provider)
            .cloned()
            .collect())
    }
}

/// Saved naming configs held in memory.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    table: RwLock<Table<NamingConfig>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load previously saved configs. Configs without an id get a fresh one.
    pub fn with_configs(configs: Vec<NamingConfig>) -> Self {
        let mut table = Table::default();
        table.last_id = configs.iter().filter_map(|c| c.id).max().unwrap_or(0);
        for mut config in configs {
            if config.id.is_none() {
                config.id = Some(table.next_id());
            }
            config.created_at.get_or_insert_with(Utc::now);
            table.rows.push(config);
        }

        Self {
            table: RwLock::new(table),
        }
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn insert(&self, mut config: NamingConfig) -> StoreResult<NamingConfig> {
        let mut table = self.table.write().await;
        config.id = Some(table.next_id());
        config.created_at = Some(Utc::now());
        table.rows.push(config.clone());

        Ok(config)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<NamingConfig>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn list(&self, filter: &ConfigFilter) -> StoreResult<Vec<NamingConfig>> {
        let table = self.table.read().await;
        let mut configs: Vec<NamingConfig> = table
            .rows
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        configs.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });

        Ok(configs)
    }

    async fn update(&self, id: i64, mut config: NamingConfig) -> StoreResult<Option<NamingConfig>> {
        let mut table = self.table.write().await;
        let Some(slot) = table.rows.iter_mut().find(|c| c.id == Some(id)) else {
            return Ok(None);
        };

        config.id = Some(id);
        config.created_at = slot.created_at;
        *slot = config.clone();

        Ok(Some(config))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != Some(id));
        Ok(table.rows.len() < before)
    }
}
