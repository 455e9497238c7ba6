//! # Nomos Core
//!
//! Orchestration for the Nomos naming engine: turning a resource type, an
//! optional cloud provider and a handful of component values into
//! provider-compliant names, and checking existing names against the same
//! rules.
//!
//! ## Overview
//!
//! - [`assemble`] builds one name from a [`NamingConfig`](nomos_config::NamingConfig)
//! - [`BestPracticeResolver`] finds the provider rule, falling back to the built-in table
//! - [`NamingEngine`] runs generate and validate requests
//! - [`NameRegistry`] and [`ConfigLibrary`] persist issued names and saved configs
//!
//! ## Architecture
//!
//! Storage sits behind the [`NameRecordStore`], [`BestPracticeCatalog`] and
//! [`ConfigStore`] traits. The in-memory implementations in [`memory_store`]
//! back the CLI and the tests.
//!
//! ## Examples
//!
//! ```
//! use nomos_config::{CloudProvider, ResourceType};
//! use nomos_core::{
//!     seed_catalog, BestPracticeResolver, GenerateNameRequest, InMemoryBestPracticeCatalog,
//!     InMemoryConfigStore, InMemoryNameRecordStore, NamingEngine,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(InMemoryBestPracticeCatalog::new());
//! let resolver = BestPracticeResolver::with_builtin_defaults(catalog.clone());
//! seed_catalog(catalog.as_ref(), resolver.defaults()).await;
//!
//! let engine = NamingEngine::new(
//!     resolver,
//!     Arc::new(InMemoryNameRecordStore::new()),
//!     Arc::new(InMemoryConfigStore::new()),
//! );
//!
//! let request = GenerateNameRequest::new(ResourceType::Vm)
//!     .with_cloud_provider(CloudProvider::Azure)
//!     .with_component("env", "prod")
//!     .with_component("location", "weu")
//!     .with_component("resource", "vm");
//! let response = engine.generate(&request).await?;
//! assert_eq!(response.names[0], "prod-weu-vm-01");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Duplicates and missing rules are ordinary outcomes reported in responses.
//! Store failures surface as [`NamingError::Store`] unchanged.

mod assembler;
mod config_library;
mod engine;
mod errors;
pub mod memory_store;
mod records;
mod registry;
mod request;
mod resolver;
mod store;

pub use assembler::{assemble, format_component};
pub use config_library::ConfigLibrary;
pub use engine::{NamingEngine, CANDIDATE_COUNT};
pub use errors::{NamingError, NamingResult, StoreError, StoreResult};
pub use memory_store::{InMemoryBestPracticeCatalog, InMemoryConfigStore, InMemoryNameRecordStore};
pub use records::{ConfigFilter, NameRecord, NameRecordFilter, NameRecordUpdate, NewNameRecord};
pub use registry::{NameRegistry, Registration};
pub use request::{
    GenerateNameRequest, GenerateNameResponse, ValidateNameRequest, ValidateNameResponse,
};
pub use resolver::{seed_catalog, BestPracticeResolver};
pub use store::{BestPracticeCatalog, ConfigStore, NameRecordStore};

#[cfg(test)]
#[path = "lib_integration_tests.rs"]
mod integration_tests;
