// reword-core/src/batch.rs
//! Batch application of a rule table to a sequence of named entities.
//!
//! [`apply`] rewrites each name, validates it and hands accepted names to a
//! write-back callback. Every request yields exactly one [`RenameOutcome`], in input
//! order, and a failed write never stops the rest of the batch. The resulting
//! [`BatchSummary`] tells the caller whether the surrounding unit of work should be
//! committed; `apply` itself never commits or rolls back.

use std::fmt;

use log::{debug, info, warn};
use serde::Serialize;

use crate::errors::WriteError;
use crate::rewriter::rewrite;
use crate::rules::RuleTable;
use crate::validators::NameValidator;

/// One entity pulled from the host at batch start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRequest<I> {
    pub entity_id: I,
    pub original_name: String,
}

impl<I> RenameRequest<I> {
    pub fn new(entity_id: I, original_name: impl Into<String>) -> Self {
        Self {
            entity_id,
            original_name: original_name.into(),
        }
    }
}

/// What happened to a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameStatus {
    /// The rules did not change the name.
    Unchanged,
    /// The new name was written back.
    Renamed,
    /// The new name failed validation; nothing was written.
    SkippedInvalid,
    /// The host rejected the write.
    Failed(String),
}

/// The per-entity audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome<I> {
    pub entity_id: I,
    pub original_name: String,
    /// The computed name, whether or not it was written.
    pub new_name: String,
    pub status: RenameStatus,
}

impl<I> RenameOutcome<I> {
    /// The name the entity carries after the batch.
    pub fn current_name(&self) -> &str {
        match self.status {
            RenameStatus::Renamed => &self.new_name,
            _ => &self.original_name,
        }
    }
}

impl<I: fmt::Display> fmt::Display for RenameOutcome<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            RenameStatus::Unchanged => write!(f, "No change for {}: '{}'", self.entity_id, self.original_name),
            RenameStatus::Renamed => write!(
                f,
                "Renamed {}: '{}' -> '{}'",
                self.entity_id, self.original_name, self.new_name
            ),
            RenameStatus::SkippedInvalid => write!(
                f,
                "Invalid name for {}: '{}' (kept '{}')",
                self.entity_id, self.new_name, self.original_name
            ),
            RenameStatus::Failed(reason) => write!(
                f,
                "Cannot change name for {}: {}",
                self.entity_id, reason
            ),
        }
    }
}

/// Aggregate counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped_invalid: usize,
    pub failed: usize,
    /// True when at least one write succeeded; the unit of work should then be committed.
    pub any_change_made: bool,
}

impl BatchSummary {
    pub fn from_outcomes<I>(outcomes: &[RenameOutcome<I>]) -> Self {
        let mut summary = BatchSummary {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome.status {
                RenameStatus::Unchanged => summary.unchanged += 1,
                RenameStatus::Renamed => summary.renamed += 1,
                RenameStatus::SkippedInvalid => summary.skipped_invalid += 1,
                RenameStatus::Failed(_) => summary.failed += 1,
            }
        }
        summary.any_change_made = summary.renamed > 0;
        summary
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checked: {} renamed, {} unchanged, {} skipped, {} failed",
            self.total, self.renamed, self.unchanged, self.skipped_invalid, self.failed
        )
    }
}

/// Outcomes in input order plus their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport<I> {
    pub outcomes: Vec<RenameOutcome<I>>,
    pub summary: BatchSummary,
}

/// Rewrites, validates and writes back every request in order.
///
/// `write_back` is only called for names that changed and passed validation.
pub fn apply<I, W>(
    requests: impl IntoIterator<Item = RenameRequest<I>>,
    table: &RuleTable,
    validator: &NameValidator,
    mut write_back: W,
) -> BatchReport<I>
where
    I: fmt::Display,
    W: FnMut(&I, &str) -> Result<(), WriteError>,
{
    let mut outcomes = Vec::new();

    for request in requests {
        let new_name = rewrite(&request.original_name, table);

        let status = if new_name == request.original_name {
            RenameStatus::Unchanged
        } else if !validator.is_valid(&new_name) {
            warn!(
                "Invalid name for element {}: '{}'; skipping.",
                request.entity_id, new_name
            );
            RenameStatus::SkippedInvalid
        } else {
            match write_back(&request.entity_id, &new_name) {
                Ok(()) => {
                    debug!(
                        "Renamed {}: '{}' -> '{}'",
                        request.entity_id, request.original_name, new_name
                    );
                    RenameStatus::Renamed
                }
                Err(e) => {
                    warn!("Cannot change name for {}: {}", request.entity_id, e);
                    RenameStatus::Failed(e.to_string())
                }
            }
        };

        outcomes.push(RenameOutcome {
            entity_id: request.entity_id,
            original_name: request.original_name,
            new_name,
            status,
        });
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!("Batch finished. {}", summary);
    BatchReport { outcomes, summary }
}
