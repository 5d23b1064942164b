// reword-core/src/lib.rs
//! # reword Core Library
//!
//! `reword-core` renames batches of named entities with an ordered table of
//! whole-word substitution rules. It is pure and stateless: the host application owns
//! the entities, persists each new name and decides, through a unit of work, whether
//! the batch is kept.
//!
//! ## Modules
//!
//! * `config`: YAML rule files and the embedded default table.
//! * `rules`: `Rule`, `Replacement` and the immutable, ordered `RuleTable`.
//! * `rewriter`: applies a table to one name.
//! * `validators`: rejects blank names and names with forbidden characters.
//! * `batch`: applies a table to a sequence of entities and summarises the outcome.
//! * `host`: traits the host implements, the unit-of-work guard and `run_batch`.
//! * `headless`: previews without a host.
//! * `errors`: the error taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use reword_core::{apply, NameValidator, RenameRequest, RenameStatus, Rule, RuleTable};
//!
//! let table = RuleTable::load(vec![
//!     Rule::new("BAR", "REFRESHMENT AREA"),
//!     Rule::delete("ROYAL"),
//! ]).unwrap();
//!
//! let requests = vec![
//!     RenameRequest::new(1, "Royal Cocktail Bar"),
//!     RenameRequest::new(2, "Level 01"),
//! ];
//! let report = apply(requests, &table, &NameValidator::default(), |_id, _name| Ok(()));
//!
//! assert_eq!(report.outcomes[0].new_name, "Cocktail REFRESHMENT AREA");
//! assert_eq!(report.outcomes[1].status, RenameStatus::Unchanged);
//! assert!(report.summary.any_change_made);
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod config;
pub mod errors;
pub mod headless;
pub mod host;
pub mod rewriter;
pub mod rules;
pub mod validators;

pub use batch::{apply, BatchReport, BatchSummary, RenameOutcome, RenameRequest, RenameStatus};
pub use config::{RuleConfig, RuleEntry, DEFAULT_DELETE_TOKEN};
pub use errors::{ConfigError, HostError, RewordError, WriteError};
pub use headless::headless_preview;
pub use host::{run_batch, LogReporter, RenameHost, Reporter, UnitOfWork};
pub use rewriter::rewrite;
pub use rules::{Replacement, Rule, RuleTable};
pub use validators::{is_valid_name, NameValidator, DEFAULT_FORBIDDEN_CHARS};
