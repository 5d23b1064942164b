// File: reword-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running the engine without a host document.
//!
//! A preview pushes plain names through the full batch pipeline with a write-back
//! that always succeeds, so the outcomes show exactly what a real run would do.

use crate::batch::{apply, BatchReport, RenameRequest};
use crate::config::RuleConfig;
use crate::errors::ConfigError;

/// Builds the table described by `config` and runs `names` through it.
///
/// Entity ids are the 1-based positions of the names. Nothing is persisted.
pub fn headless_preview<S>(
    config: &RuleConfig,
    names: impl IntoIterator<Item = S>,
) -> Result<BatchReport<usize>, ConfigError>
where
    S: Into<String>,
{
    let table = config.build_table()?;
    let validator = config.validator();
    let requests = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| RenameRequest::new(idx + 1, name));

    Ok(apply(requests, &table, &validator, |_, _| Ok(())))
}
