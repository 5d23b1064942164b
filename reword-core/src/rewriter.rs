//! The rewriter: applies a `RuleTable` to a single name.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::debug;
use regex::NoExpand;

use crate::rules::RuleTable;

/// Rewrites `input` by applying every rule of `table` in order, then trimming.
///
/// Each rule replaces all of its whole-word matches in the output of the previous rule,
/// so a later rule can match words exposed by an earlier deletion. Whitespace left inside
/// the name by deletions is kept; only the ends are trimmed.
///
/// ```rust
/// use reword_core::{rewrite, Rule, RuleTable};
///
/// let table = RuleTable::load(vec![Rule::delete("MUSIC"), Rule::new("LOUNGE", "GATHERING")]).unwrap();
/// assert_eq!(rewrite("MUSIC LOUNGE", &table), "GATHERING");
/// ```
pub fn rewrite(input: &str, table: &RuleTable) -> String {
    let mut current = input.to_string();

    for compiled in table.compiled() {
        let updated = match compiled
            .regex
            .replace_all(&current, NoExpand(compiled.rule.replacement.as_str()))
        {
            Cow::Borrowed(_) => continue,
            Cow::Owned(updated) => updated,
        };
        debug!(
            "Rule '{}' rewrote '{}' -> '{}'",
            compiled.rule.match_text, current, updated
        );
        current = updated;
    }

    current.trim().to_string()
}
