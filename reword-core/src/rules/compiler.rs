//! compiler.rs - Turns a `Rule` into a whole-word regular expression.
//!
//! The match text is escaped, so rules never carry regex syntax of their own.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::ConfigError;
use crate::rules::Rule;

/// A rule paired with its compiled matcher.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    /// Matches `rule.match_text` bounded by `\b` on both sides.
    pub regex: Regex,
}

/// Builds the `\b<escaped>\b` matcher for `rule`. `position` is only used in errors.
pub fn compile_rule(position: usize, rule: Rule) -> Result<CompiledRule, ConfigError> {
    let pattern = format!(r"\b{}\b", regex::escape(&rule.match_text));

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(!rule.case_sensitive)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| ConfigError::RuleCompilation(position, rule.match_text.clone(), e))?;

    debug!(
        target: "reword_core::compiler",
        "Rule #{} compiled: {}",
        position,
        rule
    );
    Ok(CompiledRule { rule, regex })
}

/// Builds an anchored, case-insensitive matcher for the whole of `rule.match_text`.
///
/// Used to decide whether two rules name the same word under the same case folding
/// the whole-word matcher applies.
pub(crate) fn compile_folded(position: usize, rule: &Rule) -> Result<Regex, ConfigError> {
    let pattern = format!("^{}$", regex::escape(&rule.match_text));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| ConfigError::RuleCompilation(position, rule.match_text.clone(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_rule_matches_whole_words_only() {
        let compiled = compile_rule(1, Rule::new("BAR", "X")).unwrap();
        assert!(compiled.regex.is_match("Cocktail bar"));
        assert!(!compiled.regex.is_match("BARBARIAN"));
        assert!(!compiled.regex.is_match("SNACKBAR"));
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let compiled = compile_rule(1, Rule::new("A.B", "X")).unwrap();
        assert!(compiled.regex.is_match("room A.B north"));
        assert!(!compiled.regex.is_match("room AxB north"));
    }

    #[test]
    fn test_case_sensitive_rule() {
        let compiled = compile_rule(1, Rule::new("Dj", "X").with_case_sensitive(true)).unwrap();
        assert!(compiled.regex.is_match("Dj booth"));
        assert!(!compiled.regex.is_match("DJ booth"));
    }

    #[test]
    fn test_folded_matcher_treats_sigma_forms_as_one_letter() {
        let folded = compile_folded(1, &Rule::new("ΟΔΟΣ", "X")).unwrap();
        assert!(folded.is_match("οδοσ"));
        assert!(folded.is_match("οδος"));
        assert!(!folded.is_match("ΟΔΟΣ ΟΔΟΣ"));
    }
}
