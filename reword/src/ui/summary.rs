//! Tables for batch outcomes, the batch summary and rule listings.

use std::fmt::Display;
use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use reword_core::{BatchSummary, RenameOutcome, RenameStatus, Rule};

fn new_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    if !use_color {
        table.force_no_tty();
    }
    table
}

fn status_cell(status: &RenameStatus) -> Cell {
    match status {
        RenameStatus::Unchanged => Cell::new("unchanged"),
        RenameStatus::Renamed => Cell::new("renamed").fg(Color::Green),
        RenameStatus::SkippedInvalid => Cell::new("skipped (invalid)").fg(Color::Yellow),
        RenameStatus::Failed(reason) => Cell::new(format!("failed: {}", reason)).fg(Color::Red),
    }
}

/// Prints one row per outcome that is not `Unchanged`, in batch order.
pub fn print_outcomes<W: Write, I: Display>(
    writer: &mut W,
    outcomes: &[RenameOutcome<I>],
    use_color: bool,
) -> io::Result<()> {
    let changed: Vec<&RenameOutcome<I>> = outcomes
        .iter()
        .filter(|o| o.status != RenameStatus::Unchanged)
        .collect();
    if changed.is_empty() {
        return writeln!(writer, "No names matched any rule.");
    }

    let mut table = new_table(use_color);
    table.set_header(vec!["Id", "Original name", "New name", "Status"]);
    for outcome in changed {
        table.add_row(vec![
            Cell::new(&outcome.entity_id),
            Cell::new(&outcome.original_name),
            Cell::new(&outcome.new_name),
            status_cell(&outcome.status),
        ]);
    }
    writeln!(writer, "{}", table)
}

pub fn print_summary<W: Write>(writer: &mut W, summary: &BatchSummary) -> io::Result<()> {
    writeln!(writer, "--- Rename Summary ---")?;
    writeln!(writer, "Checked:   {}", summary.total)?;
    writeln!(writer, "Renamed:   {}", summary.renamed)?;
    writeln!(writer, "Unchanged: {}", summary.unchanged)?;
    writeln!(writer, "Skipped:   {}", summary.skipped_invalid)?;
    writeln!(writer, "Failed:    {}", summary.failed)?;
    writeln!(writer, "----------------------")
}

/// Prints the rules in application order.
pub fn print_rules<'a, W: Write>(
    writer: &mut W,
    rules: impl IntoIterator<Item = &'a Rule>,
    use_color: bool,
) -> io::Result<()> {
    let mut table = new_table(use_color);
    table.set_header(vec!["#", "Match", "Replacement", "Case-sensitive"]);
    for (idx, rule) in rules.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&rule.match_text),
            Cell::new(&rule.replacement),
            Cell::new(if rule.case_sensitive { "yes" } else { "no" }),
        ]);
    }
    writeln!(writer, "{}", table)
}
