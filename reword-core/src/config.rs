//! Configuration management for `reword-core`.
//!
//! Rule tables are written as YAML and deserialized into a [`RuleConfig`]. The config
//! keeps the rules exactly as written (order and redundant case variants included) and
//! is turned into an immutable [`RuleTable`] by [`RuleConfig::build_table`].
//!
//! A replacement equal to the config's `delete_token` (default `"-"`) becomes a
//! [`Replacement::Delete`]. Setting `delete_token: ~` disables the sentinel so `"-"`
//! is substituted literally.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::rules::{Replacement, Rule, RuleTable};
use crate::validators::{NameValidator, DEFAULT_FORBIDDEN_CHARS};

/// The replacement text that means "delete the matched word".
pub const DEFAULT_DELETE_TOKEN: &str = "-";

fn default_delete_token() -> Option<String> {
    Some(DEFAULT_DELETE_TOKEN.to_string())
}

fn default_forbidden_chars() -> String {
    DEFAULT_FORBIDDEN_CHARS.to_string()
}

/// A single rule as written in a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleEntry {
    /// The whole word (or phrase) to look for.
    #[serde(rename = "match")]
    pub match_text: String,
    /// Replacement text, or the delete token.
    pub replace_with: String,
    /// Overrides the file-level `case_sensitive` default for this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

/// Top-level structure of a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleConfig {
    #[serde(default = "default_delete_token")]
    pub delete_token: Option<String>,
    /// Default case sensitivity for rules that do not set their own.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Characters that make a computed name invalid.
    #[serde(default = "default_forbidden_chars")]
    pub forbidden_chars: String,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            delete_token: default_delete_token(),
            case_sensitive: false,
            forbidden_chars: default_forbidden_chars(),
            rules: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Parses a rule file's contents. `source` names the origin in errors.
    pub fn from_yaml(text: &str, source: &str) -> Result<Self, ConfigError> {
        serde_yml::from_str(text).map_err(|e| ConfigError::Parse(source.to_string(), e.to_string()))
    }

    /// Loads rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        let config = Self::from_yaml(&text, &path.display().to_string())?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());
        Ok(config)
    }

    /// Loads the embedded calibration table.
    pub fn load_default_rules() -> Result<Self, ConfigError> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config = Self::from_yaml(default_yaml, "<default rules>")?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Resolves delete tokens and case defaults into plain [`Rule`]s, in file order.
    pub fn to_rules(&self) -> Vec<Rule> {
        self.rules
            .iter()
            .map(|entry| {
                let replacement = match &self.delete_token {
                    Some(token) if *token == entry.replace_with => Replacement::Delete,
                    _ => Replacement::Text(entry.replace_with.clone()),
                };
                Rule {
                    match_text: entry.match_text.clone(),
                    replacement,
                    case_sensitive: entry.case_sensitive.unwrap_or(self.case_sensitive),
                }
            })
            .collect()
    }

    /// Validates and compiles the rules into a [`RuleTable`].
    pub fn build_table(&self) -> Result<RuleTable, ConfigError> {
        RuleTable::load(self.to_rules())
    }

    pub fn validator(&self) -> NameValidator {
        NameValidator::from_chars(&self.forbidden_chars)
    }
}
