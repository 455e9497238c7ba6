//! Store contracts used by the naming engine.
//!
//! The engine never talks to a database directly. It reads and writes through
//! three narrow interfaces:
//!
//! - [`NameRecordStore`] - issued names, unique by `name`
//! - [`BestPracticeCatalog`] - provider rules, unique by (provider, resource type)
//! - [`ConfigStore`] - saved naming configs
//!
//! Every call is a single-row read or write. The engine runs no multi-step
//! transactions, so the store's uniqueness constraint on names is the only
//! guard against two callers issuing the same name concurrently.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync` so a single store can be shared by
//! concurrent requests behind an `Arc`.

use async_trait::async_trait;
use nomos_config::{BestPracticeRule, CloudProvider, NamingConfig, ResourceType};

use crate::{ConfigFilter, NameRecord, NameRecordFilter, NewNameRecord, StoreResult};

/// Persistent table of issued names.
#[async_trait]
pub trait NameRecordStore: Send + Sync {
    /// Find the record holding exactly `name`.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<NameRecord>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<NameRecord>>;

    /// Insert a new record, assigning its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` if a record with the same name
    /// already exists.
    async fn insert(&self, record: NewNameRecord) -> StoreResult<NameRecord>;

    /// List records matching `filter`, newest first.
    async fn list(&self, filter: &NameRecordFilter) -> StoreResult<Vec<NameRecord>>;

    /// Delete by id. Returns `false` when no record had that id.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Delete by exact name. Returns `false` when no record had that name.
    async fn delete_by_name(&self, name: &str) -> StoreResult<bool>;
}

/// Persistent catalog of best-practice rules.
#[async_trait]
pub trait BestPracticeCatalog: Send + Sync {
    async fn find_rule(
        &self,
        provider: CloudProvider,
        resource_type: ResourceType,
    ) -> StoreResult<Option<BestPracticeRule>>;

    /// Insert `rule` unless a rule with the same key exists.
    ///
    /// Returns `true` if the rule was inserted. An existing rule is left
    /// untouched so operator edits survive re-seeding.
    async fn insert_if_absent(&self, rule: BestPracticeRule) -> StoreResult<bool>;

    /// All rules, ordered by provider then resource type.
    async fn list_all(&self) -> StoreResult<Vec<BestPracticeRule>>;

    /// Rules of one provider, ordered by resource type.
    async fn list_by_provider(&self, provider: CloudProvider)
        -> StoreResult<Vec<BestPracticeRule>>;
}

/// Persistent table of saved naming configs.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Store `config`, returning it with its assigned id and creation time.
    async fn insert(&self, config: NamingConfig) -> StoreResult<NamingConfig>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<NamingConfig>>;

    /// List configs matching `filter`: defaults first, then newest first.
    async fn list(&self, filter: &ConfigFilter) -> StoreResult<Vec<NamingConfig>>;

    /// Replace the config stored under `id`, keeping its creation time.
    ///
    /// Returns `None` when no config has that id.
    async fn update(&self, id: i64, config: NamingConfig) -> StoreResult<Option<NamingConfig>>;

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
}
