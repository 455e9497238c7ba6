//! Command modules for the Nomos CLI.
//!
//! - `generate_cmd`: generate candidate names
//! - `validate_cmd`: check a name against provider rules
//! - `names_cmd`: list, register and remove issued names
//! - `rules_cmd`: inspect best-practice rules
//! - `configs_cmd`: manage saved naming configs
//! - `init_cmd`: write a starter configuration file
//!
//! Commands return their output as pretty-printed JSON.

use serde::Serialize;

use crate::errors::Error;

pub mod configs_cmd;
pub mod generate_cmd;
pub mod init_cmd;
pub mod names_cmd;
pub mod rules_cmd;
pub mod validate_cmd;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Parse a `KEY=VALUE` argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

pub(crate) fn render<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}
