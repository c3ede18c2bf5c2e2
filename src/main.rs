use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { terms, terms_file } => {
            commands::handle_check(&cli, terms.as_deref(), terms_file.as_deref())
        }
        Commands::Rebuild => commands::handle_rebuild(&cli),
        Commands::Rename => commands::handle_rename(&cli),
    }
}
