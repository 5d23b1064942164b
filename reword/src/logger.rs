//! Logger setup for the `reword` binary.
//!
//! Logs go to stderr without timestamps, e.g. `[INFO reword] reword started.`.
//! `RUST_LOG` is honoured unless an explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. Calling it more than once is harmless.
///
/// `Some(LevelFilter::Off)` silences everything; any other level applies to the
/// `reword` crates only. `None` falls back to `RUST_LOG`, defaulting to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match level {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            builder.filter_module("reword", level);
            builder.filter_module("reword_core", level);
        }
        None => {}
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
