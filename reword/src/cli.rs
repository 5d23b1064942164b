// reword/src/cli.rs
//! Command-line interface definition for the `reword` application.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::document::{ElementKind, KindSelector};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "reword",
    version = env!("CARGO_PKG_VERSION"),
    about = "Batch-rename document elements with an ordered whole-word rule table",
    long_about = "reword rewrites element names (views, sheets, schedules, rooms, areas, families, types) \
                  using an ordered table of whole-word, case-insensitive substitutions. All writes of a \
                  batch happen inside one unit of work that is kept only when at least one name changed.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging for the reword crates
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renames the selected elements of a JSON document.
    #[command(about = "Renames the selected elements of a JSON document.")]
    Rename(RenameCommand),

    /// Rewrites names read line by line from a file or stdin.
    #[command(about = "Rewrites names read line by line from a file or stdin, without a document.")]
    Preview(PreviewCommand),

    /// Tools for rule files.
    #[command(subcommand, about = "Validate or list rule tables.")]
    Rules(RulesCommand),
}

/// Named element selections for the common batch jobs.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Preset {
    /// Areas, rooms, views, sheets and schedules.
    Spaces,
    /// Family instances.
    Families,
    /// Element types.
    Types,
}

impl From<Preset> for KindSelector {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Spaces => KindSelector::spaces(),
            Preset::Families => KindSelector::families(),
            Preset::Types => KindSelector::types(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct RenameCommand {
    /// Path to the JSON document.
    #[arg(long, short = 'D', value_name = "FILE", help = "The JSON document whose elements are renamed.")]
    pub document: PathBuf,

    /// Path to a rule file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "REWORD_CONFIG", help = "Path to a rule file (YAML). Defaults to the built-in table.")]
    pub config: Option<PathBuf>,

    /// Restrict the batch to these element kinds.
    #[arg(long, short = 'k', value_enum, value_delimiter = ',', conflicts_with = "preset", help = "Only rename these element kinds (comma-separated).")]
    pub kinds: Vec<ElementKind>,

    /// Use a predefined kind selection.
    #[arg(long, value_enum, help = "Use a predefined selection of element kinds.")]
    pub preset: Option<Preset>,

    /// Write the renamed document here instead of in place.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the renamed document to this file instead of overwriting the input.")]
    pub output: Option<PathBuf>,

    /// Run the batch but never write the document.
    #[arg(long = "dry-run", help = "Run the batch but do not write the document.")]
    pub dry_run: bool,

    /// Print outcomes and summary as JSON.
    #[arg(long, help = "Print the outcomes and summary as JSON to stdout.")]
    pub json: bool,
}

impl RenameCommand {
    pub fn selector(&self) -> KindSelector {
        match self.preset {
            Some(preset) => preset.into(),
            None => KindSelector::from_kinds(self.kinds.iter().copied()),
        }
    }
}

#[derive(Parser, Debug)]
pub struct PreviewCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read names from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a rule file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "REWORD_CONFIG", help = "Path to a rule file (YAML). Defaults to the built-in table.")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    #[command(about = "Validates a rule file and prints its rule count.")]
    Check {
        #[arg(value_name = "FILE", help = "The rule file to validate.")]
        path: PathBuf,
    },
    #[command(about = "Lists the rules of a table in application order.")]
    List {
        #[arg(long = "config", value_name = "FILE", env = "REWORD_CONFIG", help = "Path to a rule file (YAML). Defaults to the built-in table.")]
        config: Option<PathBuf>,
    },
}
