//! Allowed-character classes for component values and whole names.
//!
//! A class is written as the body of a regular-expression character class
//! (`a-z0-9-`) and is always matched case-insensitively.

use regex::{Regex, RegexBuilder};

use crate::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "character_class_tests.rs"]
mod tests;

/// A compiled allowed-character class.
///
/// Generation strips characters outside the class; validation rejects a name
/// containing any of them.
///
/// # Examples
///
/// ```
/// use nomos_config::CharacterClass;
///
/// let class = CharacterClass::new("a-z0-9")?;
/// assert_eq!(class.strip_disallowed("Web_App-01"), "WebApp01");
/// assert!(!class.matches_entirely("web-01"));
/// # Ok::<(), nomos_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CharacterClass {
    body: String,
    disallowed: Regex,
    whole: Regex,
}

impl CharacterClass {
    /// Compile a character class body.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCharacterClass` when the body does
    /// not form a valid character class.
    pub fn new(body: impl Into<String>) -> ConfigurationResult<Self> {
        let body = body.into();
        let disallowed = compile(&format!("[^{}]", body), &body)?;
        let whole = compile(&format!("^[{}]+$", body), &body)?;

        Ok(Self {
            body,
            disallowed,
            whole,
        })
    }

    /// The class body as written.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Delete every character that is not in the class.
    pub fn strip_disallowed(&self, value: &str) -> String {
        self.disallowed.replace_all(value, "").into_owned()
    }

    /// Whether `value` is non-empty and made only of characters in the class.
    pub fn matches_entirely(&self, value: &str) -> bool {
        self.whole.is_match(value)
    }
}

fn compile(pattern: &str, body: &str) -> ConfigurationResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigurationError::InvalidCharacterClass {
            pattern: body.to_string(),
            reason: e.to_string(),
        })
}
