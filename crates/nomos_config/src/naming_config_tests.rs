//! Tests for naming templates.

use super::*;

fn sample_config() -> NamingConfig {
    NamingConfig {
        id: None,
        name: "Web servers".to_string(),
        resource_type: ResourceType::Vm,
        cloud_provider: Some(CloudProvider::Azure),
        environment: Some(Environment::Prod),
        components: vec![
            NamingComponent::new("env", true),
            NamingComponent::new("location", false).with_max_length(3),
            NamingComponent::new("resource", true),
            NamingComponent::new("instance", false),
        ],
        separator: "-".to_string(),
        prefix: None,
        suffix: None,
        max_total_length: Some(15),
        case_style: CaseStyle::Lowercase,
        is_default: false,
        created_at: None,
    }
}

/// Verify component order survives a JSON round trip.
#[test]
fn test_components_keep_order_through_serialization() {
    let config = sample_config();

    let json = serde_json::to_string(&config).unwrap();
    let restored: NamingConfig = serde_json::from_str(&json).unwrap();

    let names: Vec<&str> = restored.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["env", "location", "resource", "instance"]);
    assert_eq!(restored, config);
}

#[test]
fn test_serializes_camel_case_fields() {
    let json = serde_json::to_value(sample_config()).unwrap();

    assert_eq!(json["resourceType"], "vm");
    assert_eq!(json["cloudProvider"], "azure");
    assert_eq!(json["maxTotalLength"], 15);
    assert_eq!(json["caseStyle"], "lowercase");
    assert_eq!(json["components"][1]["maxLength"], 3);
    assert!(json["components"][0].get("value").is_none());
}

/// Verify a minimal payload deserialises with defaults.
#[test]
fn test_deserialize_minimal_payload() {
    let config: NamingConfig =
        serde_json::from_str(r#"{"name":"x","resourceType":"storage"}"#).unwrap();

    assert_eq!(config.resource_type, ResourceType::Storage);
    assert!(config.components.is_empty());
    assert_eq!(config.separator, "");
    assert_eq!(config.case_style, CaseStyle::Lowercase);
    assert!(!config.is_default);
}

#[test]
fn test_ensure_storable_accepts_valid_config() {
    assert!(sample_config().ensure_storable().is_ok());
}

#[test]
fn test_ensure_storable_rejects_blank_name() {
    let mut config = sample_config();
    config.name = "   ".to_string();

    assert_eq!(
        config.ensure_storable(),
        Err(ConfigurationError::required("name"))
    );
}

#[test]
fn test_ensure_storable_rejects_zero_limits() {
    let mut config = sample_config();
    config.max_total_length = Some(0);
    assert!(matches!(
        config.ensure_storable(),
        Err(ConfigurationError::InvalidValue { .. })
    ));

    let mut config = sample_config();
    config.components[2].max_length = Some(0);
    match config.ensure_storable() {
        Err(ConfigurationError::InvalidValue { field, .. }) => {
            assert_eq!(field, "components[2].maxLength");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_component_lookup() {
    let config = sample_config();

    assert_eq!(config.component("location").unwrap().max_length, Some(3));
    assert!(config.component("purpose").is_none());
}

/// Verify a saved config converts into a fully specified override.
#[test]
fn test_override_from_config_sets_every_field() {
    let overrides = NamingConfigOverride::from(sample_config());

    assert_eq!(overrides.name.as_deref(), Some("Web servers"));
    assert_eq!(overrides.separator.as_deref(), Some("-"));
    assert_eq!(overrides.case_style, Some(CaseStyle::Lowercase));
    assert_eq!(overrides.components.as_ref().map(Vec::len), Some(4));
    assert_eq!(overrides.prefix, None);
}
