// reword/src/main.rs
//! reword entry point.

use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};

use reword::cli::{Cli, Commands, RulesCommand};
use reword::commands::preview::{run_preview, PreviewOptions};
use reword::commands::rename::{run_rename, RenameOptions};
use reword::commands::rules::{run_check, run_list};
use reword::logger;
use reword::ui::output_format::error_msg;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("reword started. Version: {}", env!("CARGO_PKG_VERSION"));

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Rename(cmd) => {
            let selector = cmd.selector();
            run_rename(RenameOptions {
                document: cmd.document,
                config: cmd.config,
                selector,
                output: cmd.output,
                dry_run: cmd.dry_run,
                json: cmd.json,
                quiet,
            })
        }
        Commands::Preview(cmd) => run_preview(PreviewOptions {
            input_file: cmd.input_file,
            config: cmd.config,
            quiet,
        }),
        Commands::Rules(RulesCommand::Check { path }) => run_check(&path, quiet),
        Commands::Rules(RulesCommand::List { config }) => run_list(config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
