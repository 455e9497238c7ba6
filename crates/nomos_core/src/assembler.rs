//! Name assembly.
//!
//! Builds one candidate name from a [`NamingConfig`] and the runtime values of
//! its components. Assembly is pure: identical inputs give identical output,
//! and there is no failure path.

use nomos_config::{CharacterClass, NamingComponent, NamingConfig};
use std::collections::HashMap;
use tracing::warn;

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;

/// Apply a component's own limits to its runtime value.
///
/// The value is first cut to `max_length` characters, then every character
/// outside `allowed_chars` is removed, so the result may end up shorter than
/// the limit. A component whose character class does not compile is left
/// unfiltered.
pub fn format_component(component: &NamingComponent, value: &str) -> String {
    let mut formatted = match component.max_length {
        Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
        _ => value.to_string(),
    };

    if let Some(allowed) = &component.allowed_chars {
        match CharacterClass::new(allowed.as_str()) {
            Ok(class) => formatted = class.strip_disallowed(&formatted),
            Err(e) => warn!(
                component = %component.name,
                error = %e,
                "Ignoring invalid character class during assembly"
            ),
        }
    }

    formatted
}

/// Assemble a name from `config` and the supplied component values.
///
/// Steps, in order:
/// 1. the prefix followed by the separator, if a prefix is set
/// 2. each component with a non-empty value, in config order, formatted by
///    [`format_component`] and joined by the separator; components without a
///    value are skipped even when marked required
/// 3. the suffix, preceded by the separator
/// 4. the config's case style applied to the whole string
/// 5. a cut to `max_total_length` characters
///
/// The separator is never doubled: it is only inserted when the name built so
/// far is non-empty and does not already end with it.
///
/// # Examples
///
/// ```
/// use nomos_config::{from_best_practice, ResourceType};
/// use nomos_core::assemble;
/// use std::collections::HashMap;
///
/// let config = from_best_practice(None, ResourceType::Vm, None);
/// let values = HashMap::from([
///     ("env".to_string(), "PROD".to_string()),
///     ("resource".to_string(), "Web".to_string()),
/// ]);
///
/// assert_eq!(assemble(&config, &values), "prod-web");
/// ```
pub fn assemble(config: &NamingConfig, values: &HashMap<String, String>) -> String {
    let separator = config.separator.as_str();
    let mut name = String::new();

    if let Some(prefix) = config.prefix.as_deref().filter(|p| !p.is_empty()) {
        name.push_str(prefix);
        name.push_str(separator);
    }

    for component in &config.components {
        let Some(value) = values.get(&component.name).filter(|v| !v.is_empty()) else {
            continue;
        };

        let formatted = format_component(component, value);
        if !name.is_empty() && !name.ends_with(separator) {
            name.push_str(separator);
        }
        name.push_str(&formatted);
    }

    if let Some(suffix) = config.suffix.as_deref().filter(|s| !s.is_empty()) {
        if !name.ends_with(separator) {
            name.push_str(separator);
        }
        name.push_str(suffix);
    }

    let mut name = config.case_style.apply(&name);

    if let Some(max) = config.max_total_length {
        if name.chars().count() > max {
            name = name.chars().take(max).collect();
        }
    }

    name
}
