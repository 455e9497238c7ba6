//! End-to-end scenarios across assembly, resolution, generation, validation
//! and registration.

use super::*;
use async_trait::async_trait;
use nomos_config::{
    builtin_rules, CloudProvider, NamingComponent, NamingConfigOverride, ResourceType,
};
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    engine: NamingEngine,
    registry: NameRegistry,
    catalog: Arc<InMemoryBestPracticeCatalog>,
}

async fn fixture() -> Fixture {
    let catalog = Arc::new(InMemoryBestPracticeCatalog::new());
    let names = Arc::new(InMemoryNameRecordStore::new());
    let resolver = BestPracticeResolver::with_builtin_defaults(catalog.clone());
    seed_catalog(catalog.as_ref(), resolver.defaults()).await;

    Fixture {
        engine: NamingEngine::new(resolver, names.clone(), Arc::new(InMemoryConfigStore::new())),
        registry: NameRegistry::new(names),
        catalog,
    }
}

/// Record store that is down.
struct DownStore;

#[async_trait]
impl NameRecordStore for DownStore {
    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<NameRecord>> {
        Err(down())
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<NameRecord>> {
        Err(down())
    }

    async fn insert(&self, _record: NewNameRecord) -> StoreResult<NameRecord> {
        Err(down())
    }

    async fn list(&self, _filter: &NameRecordFilter) -> StoreResult<Vec<NameRecord>> {
        Err(down())
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<bool> {
        Err(down())
    }

    async fn delete_by_name(&self, _name: &str) -> StoreResult<bool> {
        Err(down())
    }
}

fn down() -> StoreError {
    StoreError::Unavailable {
        reason: "store is down".to_string(),
    }
}

fn web_server_override() -> NamingConfigOverride {
    NamingConfigOverride {
        components: Some(vec![
            NamingComponent::new("env", true),
            NamingComponent::new("location", false),
            NamingComponent::new("resource", true),
            NamingComponent::new("purpose", false),
            NamingComponent::new("instance", false),
        ]),
        ..Default::default()
    }
}

fn web_server_request() -> GenerateNameRequest {
    GenerateNameRequest::new(ResourceType::Vm)
        .with_component("env", "prod")
        .with_component("location", "weu")
        .with_component("resource", "vm")
        .with_component("purpose", "web")
        .with_custom_config(web_server_override())
}

// ============================================================================
// Scenarios
// ============================================================================

/// Verify a registered name pushes generation on to the next instance number.
#[tokio::test]
async fn test_registered_name_is_skipped_by_generation() {
    let fx = fixture().await;
    fx.registry
        .register(NewNameRecord::new("prod-weu-vm-web-01", ResourceType::Vm))
        .await
        .unwrap();

    let response = fx.engine.generate(&web_server_request()).await.unwrap();

    assert_eq!(response.names[0], "prod-weu-vm-web-02");
    assert!(!response.names.contains(&"prod-weu-vm-web-01".to_string()));
    assert!(response.warnings.iter().any(|w| w.contains("prod-weu-vm-web-01")));
}

/// Verify every generated name validates cleanly before it is registered.
#[tokio::test]
async fn test_generated_names_validate() {
    let fx = fixture().await;
    let requests = [
        GenerateNameRequest::new(ResourceType::Vm)
            .with_cloud_provider(CloudProvider::Azure)
            .with_component("env", "Prod")
            .with_component("location", "WEU")
            .with_component("resource", "vm"),
        GenerateNameRequest::new(ResourceType::Storage)
            .with_cloud_provider(CloudProvider::Azure)
            .with_component("env", "prod")
            .with_component("location", "weu")
            .with_component("resource", "st")
            .with_component("purpose", "logs"),
        GenerateNameRequest::new(ResourceType::Database)
            .with_cloud_provider(CloudProvider::Gcp)
            .with_component("env", "dev")
            .with_component("application", "shop")
            .with_component("resource", "sql"),
    ];

    for request in requests {
        let generated = fx.engine.generate(&request).await.unwrap();
        for name in &generated.names {
            let mut check = ValidateNameRequest::new(name.clone(), request.resource_type);
            check.cloud_provider = request.cloud_provider;

            let response = fx.engine.validate(&check).await.unwrap();

            assert!(response.valid, "{name}: {:?}", response.errors);
            assert!(!response.is_duplicate);
        }
    }
}

/// Verify a registered name is then reported as a duplicate.
#[tokio::test]
async fn test_register_then_validate_reports_duplicate() {
    let fx = fixture().await;
    let request = GenerateNameRequest::new(ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Aws)
        .with_component("env", "prod")
        .with_component("application", "shop")
        .with_component("resource", "ec2");
    let name = fx.engine.generate(&request).await.unwrap().names[0].clone();

    let registration = fx
        .registry
        .register(NewNameRecord::new(name.clone(), ResourceType::Vm))
        .await
        .unwrap();
    assert!(registration.is_registered());

    let mut check = ValidateNameRequest::new(name, ResourceType::Vm);
    check.cloud_provider = Some(CloudProvider::Aws);
    let response = fx.engine.validate(&check).await.unwrap();

    assert!(!response.valid);
    assert!(response.is_duplicate);
}

#[tokio::test]
async fn test_azure_storage_length_limit() {
    let fx = fixture().await;
    let request = ValidateNameRequest::new("ProdWEUStorageWebLongName123", ResourceType::Storage)
        .with_cloud_provider(CloudProvider::Azure);

    let response = fx.engine.validate(&request).await.unwrap();

    assert!(!response.valid);
    assert!(response.errors[0].contains("24"));
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.warnings, vec!["Name sollte in Kleinbuchstaben sein"]);
}

#[tokio::test]
async fn test_azure_vm_length_limit() {
    let fx = fixture().await;
    let request = ValidateNameRequest::new("prod-weu-vm-web-01", ResourceType::Vm)
        .with_cloud_provider(CloudProvider::Azure);

    let response = fx.engine.validate(&request).await.unwrap();

    assert_eq!(
        response.errors,
        vec!["Name überschreitet maximale Länge von 15 Zeichen"]
    );
    assert!(response.warnings.is_empty());
}

/// Verify re-seeding a populated catalog inserts nothing.
#[tokio::test]
async fn test_reseeding_is_idempotent() {
    let fx = fixture().await;

    let inserted = seed_catalog(fx.catalog.as_ref(), &builtin_rules()).await;

    assert_eq!(inserted, 0);
    assert_eq!(fx.engine.resolver().list_all().await.unwrap().len(), 17);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let engine = NamingEngine::new(
        BestPracticeResolver::with_builtin_defaults(Arc::new(InMemoryBestPracticeCatalog::new())),
        Arc::new(DownStore),
        Arc::new(InMemoryConfigStore::new()),
    );

    let generate = engine.generate(&web_server_request()).await;
    let validate = engine
        .validate(&ValidateNameRequest::new("prod-vm-01", ResourceType::Vm))
        .await;

    assert_eq!(generate.unwrap_err(), NamingError::Store(down()));
    assert_eq!(validate.unwrap_err(), NamingError::Store(down()));
}
