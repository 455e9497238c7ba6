//! Tests for the generate and validate orchestration.

use super::*;
use crate::{
    BestPracticeCatalog, InMemoryBestPracticeCatalog, InMemoryConfigStore,
    InMemoryNameRecordStore, NameRecord, NameRecordFilter, NewNameRecord, StoreError,
};
use async_trait::async_trait;
use chrono::Utc;
use nomos_config::{builtin_rules, CloudProvider, NamingComponent, ResourceType};

/// Record store whose lookups always fail.
struct UnavailableNameStore;

#[async_trait]
impl NameRecordStore for UnavailableNameStore {
    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<NameRecord>> {
        Err(StoreError::Unavailable {
            reason: "database offline".to_string(),
        })
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<NameRecord>> {
        Ok(None)
    }

    async fn insert(&self, record: NewNameRecord) -> StoreResult<NameRecord> {
        Err(StoreError::UniqueViolation { name: record.name })
    }

    async fn list(&self, _filter: &NameRecordFilter) -> StoreResult<Vec<NameRecord>> {
        Ok(Vec::new())
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<bool> {
        Ok(false)
    }

    async fn delete_by_name(&self, _name: &str) -> StoreResult<bool> {
        Ok(false)
    }
}

fn record(id: i64, name: &str) -> NameRecord {
    NameRecord {
        id,
        name: name.to_string(),
        resource_type: ResourceType::Vm,
        environment: None,
        cloud_provider: None,
        created_at: Utc::now(),
    }
}

fn engine_with(names: Vec<&str>, configs: Vec<NamingConfig>) -> NamingEngine {
    let records = names
        .into_iter()
        .enumerate()
        .map(|(i, n)| record(i as i64 + 1, n))
        .collect();
    NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(Arc::new(InMemoryBestPracticeCatalog::new())),
        Arc::new(InMemoryNameRecordStore::with_records(records).unwrap()),
        Arc::new(InMemoryConfigStore::with_configs(configs)),
    )
}

fn engine() -> NamingEngine {
    engine_with(Vec::new(), Vec::new())
}

fn web_request() -> GenerateNameRequest {
    GenerateNameRequest::new(ResourceType::Vm)
        .with_component("env", "prod")
        .with_component("resource", "web")
}

// ============================================================================
// generate
// ============================================================================

#[tokio::test]
async fn test_generate_without_provider_uses_generic_config() {
    let response = engine().generate(&web_request()).await.unwrap();

    assert_eq!(
        response.names,
        vec!["prod-web-01", "prod-web-02", "prod-web-03", "prod-web-04", "prod-web-05"]
    );
    assert!(response.warnings.is_empty());
    assert_eq!(response.config.name, "Standard");
    assert_eq!(response.config.max_total_length, Some(63));
}

/// Verify a caller-supplied instance value is replaced by the counter.
#[tokio::test]
async fn test_generate_overrides_instance_value() {
    let request = web_request().with_component("instance", "99");

    let response = engine().generate(&request).await.unwrap();

    assert_eq!(response.names[0], "prod-web-01");
    assert!(response.names.iter().all(|n| !n.ends_with("99")));
}

#[tokio::test]
async fn test_generate_with_azure_vm_rule() {
    let request = GenerateNameRequest::new(ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure)
        .with_component("env", "Prod")
        .with_component("location", "WEU")
        .with_component("resource", "vm");

    let response = engine().generate(&request).await.unwrap();

    assert_eq!(response.names[0], "prod-weu-vm-01");
    assert_eq!(response.config.name, "azure vm Standard");
    assert_eq!(response.config.cloud_provider, Some(CloudProvider::Azure));
    assert!(response.names.iter().all(|n| n.chars().count() <= 15));
}

#[tokio::test]
async fn test_generate_skips_taken_candidates() {
    let engine = engine_with(vec!["prod-web-01", "prod-web-03"], Vec::new());

    let response = engine.generate(&web_request()).await.unwrap();

    assert_eq!(response.names, vec!["prod-web-02", "prod-web-04", "prod-web-05"]);
    assert_eq!(
        response.warnings,
        vec![
            "Name \"prod-web-01\" existiert bereits",
            "Name \"prod-web-03\" existiert bereits",
        ]
    );
}

#[tokio::test]
async fn test_generate_all_taken_returns_base_name() {
    let engine = engine_with(
        vec!["prod-web-01", "prod-web-02", "prod-web-03", "prod-web-04", "prod-web-05"],
        Vec::new(),
    );

    let response = engine.generate(&web_request()).await.unwrap();

    assert_eq!(response.names, vec!["prod-web"]);
    assert_eq!(response.warnings.len(), 6);
    assert_eq!(
        response.warnings.last().map(String::as_str),
        Some("Alle generierten Namen existieren bereits in der Datenbank")
    );
}

/// Verify candidates that collapse to the same string are each checked.
#[tokio::test]
async fn test_generate_config_without_instance_component() {
    let custom = NamingConfigOverride {
        components: Some(vec![
            NamingComponent::new("env", true),
            NamingComponent::new("resource", true),
        ]),
        ..Default::default()
    };
    let request = web_request().with_custom_config(custom);

    let response = engine().generate(&request).await.unwrap();

    assert_eq!(response.names, vec!["prod-web"; 5]);
}

#[tokio::test]
async fn test_generate_does_not_persist_names() {
    let names = Arc::new(InMemoryNameRecordStore::new());
    let engine = NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(Arc::new(InMemoryBestPracticeCatalog::new())),
        names.clone(),
        Arc::new(InMemoryConfigStore::new()),
    );

    engine.generate(&web_request()).await.unwrap();

    assert!(names.list(&NameRecordFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_custom_config_merges_over_rule() {
    let custom = NamingConfigOverride {
        prefix: Some("corp".to_string()),
        separator: Some("_".to_string()),
        ..Default::default()
    };
    let request = GenerateNameRequest::new(ResourceType::Storage)
        .with_cloud_provider(CloudProvider::Aws)
        .with_component("env", "dev")
        .with_component("application", "shop")
        .with_custom_config(custom);

    let response = engine().generate(&request).await.unwrap();

    assert_eq!(response.names[0], "corp_dev_shop");
    assert_eq!(response.config.resource_type, ResourceType::Storage);
}

#[tokio::test]
async fn test_generate_uses_saved_config() {
    let mut saved = nomos_config::from_best_practice(None, ResourceType::Vm, None);
    saved.id = Some(7);
    saved.name = "Team template".to_string();
    saved.prefix = Some("team".to_string());
    let engine = engine_with(Vec::new(), vec![saved]);

    let response = engine.generate(&web_request().with_config_id(7)).await.unwrap();

    assert_eq!(response.names[0], "team-prod-web-01");
    assert_eq!(response.config.name, "Team template");
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_generate_unknown_config_id_warns_and_falls_back() {
    let response = engine()
        .generate(&web_request().with_config_id(42))
        .await
        .unwrap();

    assert_eq!(response.names[0], "prod-web-01");
    assert_eq!(response.warnings, vec!["Konfiguration 42 nicht gefunden"]);
}

/// Verify an explicit custom config takes precedence over a config id.
#[tokio::test]
async fn test_generate_custom_config_beats_config_id() {
    let mut saved = nomos_config::from_best_practice(None, ResourceType::Vm, None);
    saved.id = Some(1);
    saved.prefix = Some("saved".to_string());
    let engine = engine_with(Vec::new(), vec![saved]);
    let custom = NamingConfigOverride {
        prefix: Some("custom".to_string()),
        ..Default::default()
    };

    let response = engine
        .generate(&web_request().with_config_id(1).with_custom_config(custom))
        .await
        .unwrap();

    assert_eq!(response.names[0], "custom-prod-web-01");
}

#[tokio::test]
async fn test_generate_propagates_store_error() {
    let engine = NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(Arc::new(InMemoryBestPracticeCatalog::new())),
        Arc::new(UnavailableNameStore),
        Arc::new(InMemoryConfigStore::new()),
    );

    let err = engine.generate(&web_request()).await.unwrap_err();

    assert!(matches!(
        err,
        crate::NamingError::Store(StoreError::Unavailable { .. })
    ));
}

// ============================================================================
// validate
// ============================================================================

#[tokio::test]
async fn test_validate_without_provider_only_checks_duplicates() {
    let request = ValidateNameRequest::new("Not A Valid Name!", ResourceType::Vm);

    let response = engine().validate(&request).await.unwrap();

    assert_eq!(response, ValidateNameResponse {
        valid: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        is_duplicate: false,
    });
}

#[tokio::test]
async fn test_validate_accepts_conforming_name() {
    let request = ValidateNameRequest::new("prod-weu-vm-01", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine().validate(&request).await.unwrap();

    assert!(response.valid);
    assert!(response.errors.is_empty());
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_validate_reports_length() {
    let request = ValidateNameRequest::new("prod-weu-vm-web-01", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine().validate(&request).await.unwrap();

    assert!(!response.valid);
    assert_eq!(
        response.errors,
        vec!["Name überschreitet maximale Länge von 15 Zeichen"]
    );
}

#[tokio::test]
async fn test_validate_reports_characters() {
    let request = ValidateNameRequest::new("prod_vm", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine().validate(&request).await.unwrap();

    assert_eq!(
        response.errors,
        vec!["Name enthält nicht erlaubte Zeichen. Erlaubt: a-z0-9-"]
    );
}

/// Verify uppercase passes the character check but draws a casing warning.
#[tokio::test]
async fn test_validate_warns_on_uppercase() {
    let request = ValidateNameRequest::new("Prod-VM-01", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine().validate(&request).await.unwrap();

    assert!(response.valid);
    assert_eq!(response.warnings, vec!["Name sollte in Kleinbuchstaben sein"]);
}

#[tokio::test]
async fn test_validate_reports_duplicate() {
    let engine = engine_with(vec!["prod-vm-01"], Vec::new());
    let request = ValidateNameRequest::new("prod-vm-01", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine.validate(&request).await.unwrap();

    assert!(!response.valid);
    assert!(response.is_duplicate);
    assert_eq!(response.errors, vec!["Name existiert bereits in der Datenbank"]);
}

#[tokio::test]
async fn test_validate_collects_all_findings_in_order() {
    let engine = engine_with(vec!["Prod_WEU_Storage_Account_01"], Vec::new());
    let request = ValidateNameRequest::new("Prod_WEU_Storage_Account_01", ResourceType::Storage)
        .with_cloud_provider(CloudProvider::Azure);

    let response = engine.validate(&request).await.unwrap();

    assert_eq!(
        response.errors,
        vec![
            "Name überschreitet maximale Länge von 24 Zeichen",
            "Name enthält nicht erlaubte Zeichen. Erlaubt: a-z0-9",
            "Name existiert bereits in der Datenbank",
        ]
    );
    assert_eq!(response.warnings, vec!["Name sollte in Kleinbuchstaben sein"]);
}

/// Verify a rule whose character class does not compile rejects the name.
#[tokio::test]
async fn test_validate_invalid_rule_class_fails_character_check() {
    let catalog = Arc::new(InMemoryBestPracticeCatalog::new());
    let mut broken = builtin_rules()
        .into_iter()
        .find(|r| r.key() == (CloudProvider::Gcp, ResourceType::Vm))
        .unwrap();
    broken.allowed_chars = "z-a".to_string();
    catalog.insert_if_absent(broken).await.unwrap();
    let engine = NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(catalog),
        Arc::new(InMemoryNameRecordStore::new()),
        Arc::new(InMemoryConfigStore::new()),
    );
    let request = ValidateNameRequest::new("prod-vm", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Gcp);

    let response = engine.validate(&request).await.unwrap();

    assert!(!response.valid);
    assert_eq!(
        response.errors,
        vec!["Name enthält nicht erlaubte Zeichen. Erlaubt: z-a"]
    );
}

#[tokio::test]
async fn test_validate_propagates_store_error() {
    let engine = NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(Arc::new(InMemoryBestPracticeCatalog::new())),
        Arc::new(UnavailableNameStore),
        Arc::new(InMemoryConfigStore::new()),
    );

    let result = engine
        .validate(&ValidateNameRequest::new("x", ResourceType::Vm))
        .await;

    assert!(result.is_err());
}
