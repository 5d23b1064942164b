//! The `rules` commands: validate or list a rule table.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use reword_core::RuleConfig;

use crate::commands::load_rule_config;
use crate::ui::output_format::success_msg;
use crate::ui::summary;

/// Loads and compiles the rule file at `path`; any problem is returned as an error.
pub fn run_check(path: &Path, quiet: bool) -> Result<()> {
    let config = RuleConfig::load_from_file(path)
        .with_context(|| format!("Failed to load rules from {}", path.display()))?;
    let table = config
        .build_table()
        .with_context(|| format!("Invalid rule table in {}", path.display()))?;

    if !quiet {
        success_msg(format!("Rule file OK: {} rules.", table.len()));
    }
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", table.len())?;
    Ok(())
}

/// Prints the rules of `path` (or the default table) in application order.
pub fn run_list(path: Option<&Path>) -> Result<()> {
    let config = load_rule_config(path)?;
    let table = config.build_table().context("Invalid rule table")?;

    let stdout = io::stdout();
    let use_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    summary::print_rules(&mut writer, table.iter(), use_color)?;
    writeln!(writer, "Delete token: {}", config.delete_token.as_deref().unwrap_or("(none)"))?;
    writeln!(writer, "Forbidden characters: {}", config.forbidden_chars)?;
    Ok(())
}
