//! The `rename` command: one batch against a JSON document.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use reword_core::{run_batch, LogReporter, Reporter};

use crate::commands::load_rule_config;
use crate::document::{Document, KindSelector};
use crate::ui::output_format::{self, info_msg, success_msg};
use crate::ui::summary;

/// Label of the unit of work wrapping the batch.
pub const UNIT_OF_WORK_LABEL: &str = "Batch Replace Words";

/// Options for [`run_rename`].
pub struct RenameOptions {
    pub document: PathBuf,
    pub config: Option<PathBuf>,
    pub selector: KindSelector,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Prints report lines to stderr.
struct ConsoleReporter {
    use_color: bool,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: &str) {
        let _ = output_format::print_info_message(&mut io::stderr(), message, self.use_color);
    }
}

pub fn run_rename(opts: RenameOptions) -> Result<()> {
    info!("Starting rename operation.");

    let config = load_rule_config(opts.config.as_deref())?;
    let table = config.build_table().context("Invalid rule table")?;
    let validator = config.validator();
    debug!("Rule table has {} rules.", table.len());

    let mut document = Document::load(&opts.document)?;

    let mut reporter: Box<dyn Reporter> = if opts.quiet {
        Box::new(LogReporter)
    } else {
        Box::new(ConsoleReporter {
            use_color: io::stderr().is_terminal(),
        })
    };

    let report = run_batch(
        &mut document,
        &opts.selector,
        &table,
        &validator,
        reporter.as_mut(),
        UNIT_OF_WORK_LABEL,
    )
    .context("Batch could not run")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        serde_json::to_writer_pretty(&mut writer, &report).context("Failed to write JSON report")?;
        writeln!(writer)?;
    } else {
        let use_color = stdout.is_terminal();
        summary::print_outcomes(&mut writer, &report.outcomes, use_color)?;
        summary::print_summary(&mut writer, &report.summary)?;
    }

    if !report.summary.any_change_made {
        if !opts.quiet {
            info_msg("No names changed; document left untouched.");
        }
    } else if opts.dry_run {
        if !opts.quiet {
            info_msg("Dry run: document not written.");
        }
    } else {
        let target = opts.output.as_ref().unwrap_or(&opts.document);
        document
            .save(target)
            .with_context(|| format!("Failed to save document to {}", target.display()))?;
        if !opts.quiet {
            success_msg(format!("Document written to {}", target.display()));
        }
    }

    info!("Rename operation completed.");
    Ok(())
}
