//! Seams to the application that owns the renamed entities.
//!
//! The core never talks to a document directly. A host implements [`RenameHost`] to
//! enumerate entities, persist one name at a time and provide a transactional unit of
//! work. [`UnitOfWork`] scopes that transaction and rolls it back on every exit path
//! that did not commit. [`run_batch`] wires enumeration, [`apply`](crate::batch::apply)
//! and the commit-or-rollback decision together.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::{debug, info, warn};

use crate::batch::{apply, BatchReport, RenameRequest, RenameStatus};
use crate::errors::{HostError, RewordError, WriteError};
use crate::rules::RuleTable;
use crate::validators::NameValidator;

/// The document-side collaborator of a batch.
pub trait RenameHost {
    /// Opaque identifier of an entity.
    type Id: Clone + fmt::Display;
    /// Host-specific choice of which entities to enumerate.
    type Selector: ?Sized;

    /// Current `(id, name)` pairs for the selected entities, in a stable order.
    fn enumerate(&self, selector: &Self::Selector) -> Vec<RenameRequest<Self::Id>>;

    /// Persists one new name. Only called while a unit of work is open.
    fn write_name(&mut self, id: &Self::Id, new_name: &str) -> Result<(), WriteError>;

    fn begin(&mut self, label: &str) -> Result<(), HostError>;
    fn commit(&mut self) -> Result<(), HostError>;
    fn rollback(&mut self) -> Result<(), HostError>;
}

/// A one-way sink for human-readable progress lines.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Forwards report lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, message: &str) {
        info!(target: "reword_core::report", "{}", message);
    }
}

/// Collects report lines in memory.
impl Reporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// An open unit of work on a host. Dropped without [`commit`](UnitOfWork::commit), it rolls back.
pub struct UnitOfWork<'h, H: RenameHost> {
    host: &'h mut H,
    label: String,
    open: bool,
}

impl<'h, H: RenameHost> UnitOfWork<'h, H> {
    pub fn begin(host: &'h mut H, label: &str) -> Result<Self, HostError> {
        host.begin(label)?;
        debug!("Unit of work '{}' started.", label);
        Ok(Self {
            host,
            label: label.to_string(),
            open: true,
        })
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    pub fn commit(mut self) -> Result<(), HostError> {
        self.host.commit()?;
        self.open = false;
        debug!("Unit of work '{}' committed.", self.label);
        Ok(())
    }

    pub fn rollback(mut self) -> Result<(), HostError> {
        self.open = false;
        self.host.rollback()?;
        debug!("Unit of work '{}' rolled back.", self.label);
        Ok(())
    }
}

impl<H: RenameHost> Drop for UnitOfWork<'_, H> {
    fn drop(&mut self) {
        if self.open {
            warn!("Unit of work '{}' released without commit; rolling back.", self.label);
            if let Err(e) = self.host.rollback() {
                warn!("Rollback of '{}' failed: {}", self.label, e);
            }
        }
    }
}

/// Runs one batch inside one unit of work labelled `label`.
///
/// The unit of work is committed when at least one name was written and rolled back
/// otherwise. Every non-unchanged outcome and the final summary go to `reporter`.
pub fn run_batch<H, R>(
    host: &mut H,
    selector: &H::Selector,
    table: &RuleTable,
    validator: &NameValidator,
    reporter: &mut R,
    label: &str,
) -> Result<BatchReport<H::Id>, RewordError>
where
    H: RenameHost,
    R: Reporter + ?Sized,
{
    let requests = host.enumerate(selector);
    reporter.report(&format!("Found {} elements to check.", requests.len()));

    let mut scope = UnitOfWork::begin(host, label)?;
    let report = apply(requests, table, validator, |id, name| {
        scope.host_mut().write_name(id, name)
    });

    for outcome in &report.outcomes {
        if outcome.status != RenameStatus::Unchanged {
            reporter.report(&outcome.to_string());
        }
    }

    if report.summary.any_change_made {
        scope.commit()?;
        reporter.report(&format!("'{}' committed.", label));
    } else {
        scope.rollback()?;
        reporter.report(&format!("'{}' rolled back: no names changed.", label));
    }
    reporter.report(&report.summary.to_string());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    /// Minimal in-memory host recording its transaction calls.
    #[derive(Default)]
    struct MemoryHost {
        names: Vec<(u32, String)>,
        snapshot: Option<Vec<(u32, String)>>,
        locked: Vec<u32>,
        calls: Vec<&'static str>,
    }

    impl RenameHost for MemoryHost {
        type Id = u32;
        type Selector = ();

        fn enumerate(&self, _: &()) -> Vec<RenameRequest<u32>> {
            self.names.iter().map(|(id, name)| RenameRequest::new(*id, name.clone())).collect()
        }

        fn write_name(&mut self, id: &u32, new_name: &str) -> Result<(), WriteError> {
            if self.locked.contains(id) {
                return Err(WriteError::Locked(id.to_string()));
            }
            let entry = self
                .names
                .iter_mut()
                .find(|(eid, _)| *eid == *id)
                .ok_or_else(|| WriteError::NotFound(id.to_string()))?;
            entry.1 = new_name.to_string();
            Ok(())
        }

        fn begin(&mut self, _: &str) -> Result<(), HostError> {
            self.calls.push("begin");
            self.snapshot = Some(self.names.clone());
            Ok(())
        }

        fn commit(&mut self) -> Result<(), HostError> {
            self.calls.push("commit");
            self.snapshot = None;
            Ok(())
        }

        fn rollback(&mut self) -> Result<(), HostError> {
            self.calls.push("rollback");
            if let Some(snapshot) = self.snapshot.take() {
                self.names = snapshot;
            }
            Ok(())
        }
    }

    fn host(names: &[(u32, &str)]) -> MemoryHost {
        MemoryHost {
            names: names.iter().map(|(id, n)| (*id, n.to_string())).collect(),
            ..Default::default()
        }
    }

    fn table() -> RuleTable {
        RuleTable::load(vec![Rule::new("BAR", "REFRESHMENT AREA")]).unwrap()
    }

    #[test]
    fn test_run_batch_commits_when_something_changed() {
        let mut h = host(&[(1, "Juice Bar"), (2, "Office")]);
        let mut lines: Vec<String> = Vec::new();
        let report = run_batch(&mut h, &(), &table(), &NameValidator::default(), &mut lines, "Batch Replace Words").unwrap();

        assert_eq!(report.summary.renamed, 1);
        assert_eq!(h.calls, vec!["begin", "commit"]);
        assert_eq!(h.names[0].1, "Juice REFRESHMENT AREA");
        assert!(lines.iter().any(|l| l.contains("committed")));
    }

    #[test]
    fn test_run_batch_rolls_back_when_nothing_written() {
        let mut h = host(&[(1, "Bar")]);
        h.locked.push(1);
        let mut lines: Vec<String> = Vec::new();
        let report = run_batch(&mut h, &(), &table(), &NameValidator::default(), &mut lines, "Batch").unwrap();

        assert!(!report.summary.any_change_made);
        assert_eq!(h.calls, vec!["begin", "rollback"]);
        assert_eq!(h.names[0].1, "Bar");
        assert!(lines.iter().any(|l| l == "Cannot change name for 1: element 1 is locked"));
    }

    #[test]
    fn test_dropped_unit_of_work_rolls_back() {
        let mut h = host(&[(1, "Bar")]);
        {
            let mut scope = UnitOfWork::begin(&mut h, "scratch").unwrap();
            scope.host_mut().write_name(&1, "Changed").unwrap();
        }
        assert_eq!(h.calls, vec!["begin", "rollback"]);
        assert_eq!(h.names[0].1, "Bar");
    }
}
