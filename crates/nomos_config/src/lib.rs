//! Naming configuration for Nomos.
//!
//! This crate holds the vocabulary and the pure rules of the naming engine:
//!
//! - classification enums ([`CloudProvider`], [`ResourceType`], [`Environment`])
//! - naming templates ([`NamingConfig`], [`NamingComponent`], [`NamingConfigOverride`])
//! - provider best-practice rules and the built-in table ([`BestPracticeRule`], [`builtin_rules`])
//! - casing conventions ([`CaseStyle`]) and allowed-character classes ([`CharacterClass`])
//! - default config synthesis and merging ([`from_best_practice`], [`merge`])
//!
//! Nothing here performs I/O. Store access and orchestration live in `nomos_core`.

pub mod best_practice;
pub mod case_style;
pub mod character_class;
pub mod errors;
pub mod naming_config;
pub mod synthesizer;
pub mod types;

pub use best_practice::{builtin_rules, BestPracticeRule};
pub use case_style::{apply_case, CaseStyle};
pub use character_class::CharacterClass;
pub use errors::{ConfigurationError, ConfigurationResult};
pub use naming_config::{NamingComponent, NamingConfig, NamingConfigOverride};
pub use synthesizer::{from_best_practice, merge, GENERIC_MAX_TOTAL_LENGTH};
pub use types::{CloudProvider, Environment, ResourceType};
