//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod render;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// quotes - browse a sheet of quotes grouped by date
#[derive(Parser, Debug)]
#[command(name = "quotes", version, about, long_about = None)]
pub struct Cli {
    /// Quote sheet: a CSV file path or an http(s) URL (overrides config file)
    #[arg(short = 's', long, global = true)]
    pub source: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one group of quotes
    Show(ShowArgs),

    /// List all groups with their quote counts
    #[command(name = "ls", visible_alias = "list")]
    List(ListArgs),

    /// Browse groups interactively, reading commands from stdin
    Browse(BrowseArgs),

    /// Export all groups as a single HTML page
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// 1-based position of the group to show (see `ls`)
    #[arg(short, long, conflicts_with = "shuffle")]
    pub position: Option<usize>,

    /// Show a random group
    #[arg(long)]
    pub shuffle: bool,

    /// Reveal authors
    #[arg(short, long)]
    pub authors: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `browse` command
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Start on a random group
    #[arg(long)]
    pub shuffle: bool,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output file (prints to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Theme name (default, dark) or path to a CSS file
    #[arg(long)]
    pub theme: Option<String>,

    /// Path to a custom page template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Page title
    #[arg(long, default_value = "Quotes")]
    pub title: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
