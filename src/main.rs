//! ENTITY-001 CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::Context;
use entity::cli::{Cli, Commands, ConfigCommand, LangCommand};
use entity::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Run));

    if interactive {
        if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
            // The session still works without a log file
            if let Err(e) = logging::init_file(&path) {
                eprintln!("warning: {:#}", e);
            }
        }
    } else {
        logging::init_stderr()?;
    }

    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(config = %ctx.config_path.display(), "Resolved context");

    match cli.command {
        None | Some(Commands::Run) => commands::run::handle(&ctx),
        Some(Commands::Filler { count }) => commands::filler::handle(&ctx, count),
        Some(Commands::About) => commands::about::handle(&ctx),
        Some(Commands::Lang { action }) => match action {
            None => commands::lang::handle_show(&ctx),
            Some(LangCommand::Set { language }) => commands::lang::handle_set(&ctx, language),
            Some(LangCommand::Toggle) => commands::lang::handle_toggle(&ctx),
        },
        Some(Commands::Config { action }) => match action {
            ConfigCommand::Show => commands::config::handle_show(&ctx),
            ConfigCommand::Path => commands::config::handle_path(&ctx),
        },
    }
}
