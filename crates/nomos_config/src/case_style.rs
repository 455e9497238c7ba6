//! Casing conventions applied to assembled names.
//!
//! The transformation is a total function: every input maps to some output
//! and an unrecognised style name falls back to lowercase rather than failing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[cfg(test)]
#[path = "case_style_tests.rs"]
mod tests;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+(.)").expect("word boundary pattern is valid"));

/// One of the five supported casing conventions.
///
/// # Serialization
///
/// Serialises to `lowercase`, `uppercase`, `camelCase`, `PascalCase` and
/// `kebab-case`. Any other string deserialises to [`CaseStyle::Lowercase`].
///
/// # Examples
///
/// ```
/// use nomos_config::CaseStyle;
///
/// assert_eq!(CaseStyle::PascalCase.apply("prod web-api"), "ProdWebApi");
/// assert_eq!(CaseStyle::from("shouty"), CaseStyle::Lowercase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CaseStyle {
    #[default]
    #[serde(rename = "lowercase")]
    Lowercase,
    #[serde(rename = "uppercase")]
    Uppercase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
}

impl CaseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Lowercase => "lowercase",
            CaseStyle::Uppercase => "uppercase",
            CaseStyle::CamelCase => "camelCase",
            CaseStyle::PascalCase => "PascalCase",
            CaseStyle::KebabCase => "kebab-case",
        }
    }

    /// Transform `text` into this casing convention.
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseStyle::Lowercase => text.to_lowercase(),
            CaseStyle::Uppercase => text.to_uppercase(),
            CaseStyle::CamelCase => to_camel_case(text),
            CaseStyle::PascalCase => upper_first(&to_camel_case(text)),
            CaseStyle::KebabCase => WHITESPACE_RUN
                .replace_all(&text.to_lowercase(), "-")
                .into_owned(),
        }
    }
}

impl From<&str> for CaseStyle {
    fn from(value: &str) -> Self {
        match value {
            "uppercase" => CaseStyle::Uppercase,
            "camelCase" => CaseStyle::CamelCase,
            "PascalCase" => CaseStyle::PascalCase,
            "kebab-case" => CaseStyle::KebabCase,
            _ => CaseStyle::Lowercase,
        }
    }
}

impl From<String> for CaseStyle {
    fn from(value: String) -> Self {
        CaseStyle::from(value.as_str())
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transform `text` with the named style, treating unknown names as lowercase.
pub fn apply_case(text: &str, style: &str) -> String {
    CaseStyle::from(style).apply(text)
}

/// Lowercase, then drop every run of characters outside `[a-z0-9]` and
/// uppercase the character that follows it.
fn to_camel_case(text: &str) -> String {
    WORD_BOUNDARY
        .replace_all(&text.to_lowercase(), |caps: &regex::Captures<'_>| {
            caps[1].to_uppercase()
        })
        .into_owned()
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
