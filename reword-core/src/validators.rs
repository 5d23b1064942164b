// File: reword-core/src/validators.rs
//! Validation of computed names before they are written back to the host.
//!
//! A name is rejected when it is blank after trimming or when it contains a character
//! the host refuses in element names. Validation fails closed: anything doubtful is
//! reported as invalid and the element keeps its original name.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Characters the host rejects in element names unless configured otherwise.
pub const DEFAULT_FORBIDDEN_CHARS: &str = "[]{}:;,";

static DEFAULT_FORBIDDEN: Lazy<HashSet<char>> = Lazy::new(|| DEFAULT_FORBIDDEN_CHARS.chars().collect());

/// Returns `true` when `name` is non-blank and free of `forbidden` characters.
pub fn is_valid_name(name: &str, forbidden: &HashSet<char>) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    !name.chars().any(|c| forbidden.contains(&c))
}

/// A reusable name predicate holding its forbidden character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidator {
    forbidden: HashSet<char>,
}

impl NameValidator {
    pub fn new(forbidden: impl IntoIterator<Item = char>) -> Self {
        Self {
            forbidden: forbidden.into_iter().collect(),
        }
    }

    /// Builds a validator from every character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars())
    }

    pub fn is_valid(&self, name: &str) -> bool {
        is_valid_name(name, &self.forbidden)
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self {
            forbidden: DEFAULT_FORBIDDEN.clone(),
        }
    }
}
