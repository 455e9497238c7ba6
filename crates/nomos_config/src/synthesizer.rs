//! Default naming configs derived from best-practice rules.
//!
//! [`from_best_practice`] turns a rule (or its absence) into a complete
//! [`NamingConfig`]; [`merge`] overlays a caller's partial config on top of
//! that default.

use crate::{
    BestPracticeRule, CaseStyle, CloudProvider, NamingComponent, NamingConfig,
    NamingConfigOverride, ResourceType,
};

#[cfg(test)]
#[path = "synthesizer_tests.rs"]
mod tests;

/// Length limit of the generic config used when no rule applies.
pub const GENERIC_MAX_TOTAL_LENGTH: usize = 63;

/// Label given to synthesised configs.
const STANDARD_LABEL: &str = "Standard";

/// Components that are marked required when derived from a rule.
const REQUIRED_COMPONENTS: [&str; 2] = ["env", "resource"];

/// Build the default config for `resource_type`.
///
/// Without a rule the generic template `env-resource-instance` is used,
/// lowercase, joined by `-` and capped at 63 characters. With a rule every
/// recommended component becomes a slot in the same order, and the rule's
/// separator, casing and length limit are copied over.
pub fn from_best_practice(
    rule: Option<&BestPracticeRule>,
    resource_type: ResourceType,
    cloud_provider: Option<CloudProvider>,
) -> NamingConfig {
    let Some(rule) = rule else {
        return NamingConfig {
            id: None,
            name: STANDARD_LABEL.to_string(),
            resource_type,
            cloud_provider,
            environment: None,
            components: vec![
                NamingComponent::new("env", true),
                NamingComponent::new("resource", true),
                NamingComponent::new("instance", false),
            ],
            separator: "-".to_string(),
            prefix: None,
            suffix: None,
            max_total_length: Some(GENERIC_MAX_TOTAL_LENGTH),
            case_style: CaseStyle::Lowercase,
            is_default: false,
            created_at: None,
        };
    };

    let components = rule
        .recommended_components
        .iter()
        .map(|name| NamingComponent::new(name.as_str(), REQUIRED_COMPONENTS.contains(&name.as_str())))
        .collect();

    NamingConfig {
        id: None,
        name: format!("{} {} {}", rule.provider, rule.resource_type, STANDARD_LABEL),
        resource_type,
        cloud_provider: Some(rule.provider),
        environment: None,
        components,
        separator: rule.separator.clone(),
        prefix: None,
        suffix: None,
        max_total_length: Some(rule.max_length),
        case_style: rule.case_style,
        is_default: false,
        created_at: None,
    }
}

/// Overlay `custom` on the default config for `resource_type`.
///
/// Every field present in `custom` replaces the default, including an empty
/// component list. An empty `separator` counts as absent and keeps the
/// default separator. `resource_type` always ends up as the requested value.
pub fn merge(
    custom: NamingConfigOverride,
    rule: Option<&BestPracticeRule>,
    resource_type: ResourceType,
) -> NamingConfig {
    let base = from_best_practice(rule, resource_type, custom.cloud_provider);

    // TODO: an intentionally empty separator cannot override a rule's "-";
    // needs a tri-state field in the request payload to express it.
    let separator = custom
        .separator
        .filter(|s| !s.is_empty())
        .unwrap_or(base.separator);

    NamingConfig {
        id: custom.id.or(base.id),
        name: custom.name.unwrap_or(base.name),
        resource_type,
        cloud_provider: custom.cloud_provider.or(base.cloud_provider),
        environment: custom.environment.or(base.environment),
        components: custom.components.unwrap_or(base.components),
        separator,
        prefix: custom.prefix.or(base.prefix),
        suffix: custom.suffix.or(base.suffix),
        max_total_length: custom.max_total_length.or(base.max_total_length),
        case_style: custom.case_style.unwrap_or(base.case_style),
        is_default: custom.is_default.unwrap_or(base.is_default),
        created_at: custom.created_at.or(base.created_at),
    }
}
