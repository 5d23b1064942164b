//! Terminal output: colored status lines and outcome tables.

pub mod output_format;
pub mod summary;
