//! Command implementations for the `reword` CLI.

pub mod preview;
pub mod rename;
pub mod rules;

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use reword_core::RuleConfig;

/// Loads the rule file at `path`, or the embedded default table when none is given.
pub fn load_rule_config(path: Option<&Path>) -> Result<RuleConfig> {
    match path {
        Some(path) => RuleConfig::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => {
            debug!("No rule file given; using the default rule table.");
            RuleConfig::load_default_rules().context("Failed to load default rules")
        }
    }
}
