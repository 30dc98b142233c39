//! quoteboard - browse a CSV sheet of quotes grouped by date

pub mod cli;
pub mod controller;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_browse, handle_completions, handle_export, handle_list, handle_show},
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let source = config.source(cli.source.as_deref());

    match &cli.command {
        Command::Show(args) => handle_show(args, &source, &config),
        Command::List(args) => handle_list(args, &source, &config),
        Command::Browse(args) => handle_browse(args, &source, &config),
        Command::Export(args) => handle_export(args, &source, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
