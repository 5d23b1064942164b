//! The `preview` command: rewrite plain names line by line without a document.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use reword_core::{headless_preview, RenameStatus};

use crate::commands::load_rule_config;
use crate::ui::output_format::warn_msg;

pub struct PreviewOptions {
    pub input_file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run_preview(opts: PreviewOptions) -> Result<()> {
    let input = match &opts.input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    let config = load_rule_config(opts.config.as_deref())?;
    let report = headless_preview(&config, input.lines()).context("Invalid rule table")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for outcome in &report.outcomes {
        if outcome.status == RenameStatus::SkippedInvalid && !opts.quiet {
            warn_msg(format!(
                "Line {}: '{}' is not a valid name; kept '{}'",
                outcome.entity_id, outcome.new_name, outcome.original_name
            ));
        }
        writeln!(writer, "{}", outcome.current_name())?;
    }

    info!("Preview completed. {}", report.summary);
    Ok(())
}
