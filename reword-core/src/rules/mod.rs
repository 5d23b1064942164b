//! Rule definitions and the ordered, immutable `RuleTable`.
//!
//! A table is built once per run from an ordered list of [`Rule`]s. Loading rejects
//! empty match texts and ambiguous rules, then compiles every rule into a whole-word
//! matcher (see [`compiler`]). Table order is part of the contract: rules are applied
//! one after another, each seeing the output of the previous ones.

pub mod compiler;

use std::fmt;

use log::debug;
use regex::Regex;

use crate::errors::ConfigError;
use compiler::{compile_folded, compile_rule, CompiledRule};

/// What a matched word is replaced with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Replacement {
    /// Substitute the literal text.
    Text(String),
    /// Remove the matched word. Surrounding whitespace stays until the final trim.
    Delete,
}

impl Replacement {
    /// The literal text written in place of a match.
    pub fn as_str(&self) -> &str {
        match self {
            Replacement::Text(text) => text,
            Replacement::Delete => "",
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Text(text) => write!(f, "'{}'", text),
            Replacement::Delete => write!(f, "<delete>"),
        }
    }
}

/// A single whole-word substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub match_text: String,
    pub replacement: Replacement,
    pub case_sensitive: bool,
}

impl Rule {
    /// A case-insensitive rule replacing `match_text` with `replacement`.
    pub fn new(match_text: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            match_text: match_text.into(),
            replacement: Replacement::Text(replacement.into()),
            case_sensitive: false,
        }
    }

    /// A case-insensitive rule removing `match_text`.
    pub fn delete(match_text: impl Into<String>) -> Self {
        Self {
            match_text: match_text.into(),
            replacement: Replacement::Delete,
            case_sensitive: false,
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// True when both rules can match the same piece of text.
    ///
    /// `other_folded` is the anchored case-insensitive matcher of `other`.
    fn overlaps(&self, other: &Rule, other_folded: &Regex) -> bool {
        if self.case_sensitive && other.case_sensitive {
            self.match_text == other.match_text
        } else {
            other_folded.is_match(&self.match_text)
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> {}", self.match_text, self.replacement)?;
        if self.case_sensitive {
            write!(f, " (case-sensitive)")?;
        }
        Ok(())
    }
}

/// An ordered set of compiled rules. Immutable after [`RuleTable::load`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Validates and compiles `rules`, keeping their order.
    ///
    /// Rule positions in errors are 1-based.
    pub fn load(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        debug!("Loading rule table with {} rules.", rules.len());

        for (idx, rule) in rules.iter().enumerate() {
            if rule.match_text.is_empty() {
                return Err(ConfigError::EmptyMatchText(idx + 1));
            }
        }
        check_ambiguity(&rules)?;

        let compiled = rules
            .into_iter()
            .enumerate()
            .map(|(idx, rule)| compile_rule(idx + 1, rule))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Rule table ready: {} rules compiled.", compiled.len());
        Ok(Self { rules: compiled })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub(crate) fn compiled(&self) -> &[CompiledRule] {
        &self.rules
    }
}

/// Rejects rules that can match the same word but disagree on its replacement.
///
/// Case variants that agree with an earlier case-insensitive rule are kept as
/// written; they are only counted for the debug log.
fn check_ambiguity(rules: &[Rule]) -> Result<(), ConfigError> {
    let folded = rules
        .iter()
        .enumerate()
        .map(|(idx, rule)| compile_folded(idx + 1, rule))
        .collect::<Result<Vec<_>, _>>()?;
    let mut subsumed = 0usize;

    for (idx, rule) in rules.iter().enumerate() {
        let mut covered = false;
        for (prev, other) in rules[..idx].iter().enumerate() {
            if !rule.overlaps(other, &folded[prev]) {
                continue;
            }
            if other.replacement != rule.replacement {
                return Err(ConfigError::AmbiguousRule {
                    first: prev + 1,
                    first_match: other.match_text.clone(),
                    first_target: other.replacement.to_string(),
                    second: idx + 1,
                    second_match: rule.match_text.clone(),
                    second_target: rule.replacement.to_string(),
                });
            }
            covered |= !other.case_sensitive;
        }
        if covered {
            subsumed += 1;
        }
    }

    if subsumed > 0 {
        debug!(
            "{} rule(s) repeat an earlier case-insensitive rule with the same replacement; kept as written.",
            subsumed
        );
    }
    Ok(())
}
