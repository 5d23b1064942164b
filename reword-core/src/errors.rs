//! errors.rs - Custom error types for the reword-core library.
//!
//! Configuration problems are fatal and surface before any entity is touched.
//! Write problems are per-entity and end up in a `RenameStatus::Failed` outcome.
//! Host problems concern the unit of work itself.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// A malformed or ambiguous rule table, or a rule file that could not be read.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Rule #{0} has an empty match text")]
    EmptyMatchText(usize),

    #[error(
        "Rules #{first} ('{first_match}' -> {first_target}) and #{second} ('{second_match}' -> {second_target}) match the same word but disagree on the replacement"
    )]
    AmbiguousRule {
        first: usize,
        first_match: String,
        first_target: String,
        second: usize,
        second_match: String,
        second_target: String,
    },

    #[error("Failed to compile rule #{0} ('{1}'): {2}")]
    RuleCompilation(usize, String, regex::Error),

    #[error("Failed to read rule file {0}: {1}")]
    Io(String, std::io::Error),

    #[error("Failed to parse rule file {0}: {1}")]
    Parse(String, String),
}

/// A single entity's new name could not be persisted by the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WriteError {
    #[error("document is read-only")]
    ReadOnly,

    #[error("element {0} is locked")]
    Locked(String),

    #[error("element {0} not found")]
    NotFound(String),

    #[error("no unit of work is open")]
    NoUnitOfWork,

    #[error("value rejected by host: {0}")]
    Rejected(String),
}

/// The unit of work surrounding a batch could not be opened, committed or rolled back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HostError {
    #[error("a unit of work is already open: '{0}'")]
    AlreadyOpen(String),

    #[error("no unit of work is open")]
    NotOpen,

    #[error("host failure: {0}")]
    Other(String),
}

/// Umbrella error for callers that drive a whole run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RewordError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}
