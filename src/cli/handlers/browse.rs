//! Interactive browsing driven by line commands on stdin.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::cli::BrowseArgs;
use crate::cli::config::Config;
use crate::cli::render::TerminalRenderer;
use crate::controller::{Controller, ControllerError, Renderer};
use crate::infra::{QuoteSource, open_source};

const PROMPT: &str = "(n)ext (p)rev (s)huffle (a)uthors (r)efresh (q)uit > ";

const HELP: &str = "\
Commands:
  n, next, <enter>   show the next group
  p, prev            show the previous group
  s, shuffle         jump to a random group
  a, authors         show or hide authors
  r, refresh         reload the quote sheet
  h, help            show this help
  q, quit            leave
";

/// A single browsing command read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Shuffle,
    ToggleAuthors,
    Refresh,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parses one input line. An empty line means "next".
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "s" | "shuffle" => Self::Shuffle,
            "a" | "authors" => Self::ToggleAuthors,
            "r" | "refresh" => Self::Refresh,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

pub fn handle_browse(args: &BrowseArgs, source: &str, config: &Config) -> Result<()> {
    let source = open_source(source, config.cache_bust_param())
        .with_context(|| format!("failed to open quote source {}", source))?;
    let renderer = TerminalRenderer::new(io::stdout(), config.labels);
    let mut controller = Controller::new(source, renderer);

    run_browse(io::stdin().lock(), io::stdout(), &mut controller, args.shuffle)
}

/// Loads the sheet, then applies commands from `input` until quit or EOF.
///
/// A failed load or refresh is reported and browsing continues with whatever
/// was shown before; only rendering failures end the loop with an error.
pub fn run_browse<I, W, S, R>(
    mut input: I,
    mut prompt: W,
    controller: &mut Controller<S, R>,
    shuffle_first: bool,
) -> Result<()>
where
    I: BufRead,
    W: Write,
    S: QuoteSource,
    R: Renderer,
{
    report(&mut prompt, controller.load())?;
    if shuffle_first {
        report(&mut prompt, controller.shuffle())?;
    }

    let mut line = String::new();
    loop {
        write!(prompt, "{}", PROMPT)?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt)?;
            break;
        }

        let Some(command) = BrowseCommand::parse(&line) else {
            writeln!(prompt, "unknown command '{}', type h for help", line.trim())?;
            continue;
        };

        let result = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                write!(prompt, "{}", HELP)?;
                continue;
            }
            BrowseCommand::Next => controller.next(),
            BrowseCommand::Previous => controller.previous(),
            BrowseCommand::Shuffle => controller.shuffle(),
            BrowseCommand::ToggleAuthors => controller.toggle_authors(),
            BrowseCommand::Refresh => controller.refresh(),
        };
        report(&mut prompt, result)?;
    }

    let session = controller.session();
    debug!(
        groups = session.groups().len(),
        position = session.index() + 1,
        "browse ended"
    );
    Ok(())
}

/// Prints load failures and keeps going; anything else is fatal.
fn report<W: Write>(prompt: &mut W, result: Result<(), ControllerError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ControllerError::Load(err)) => {
            writeln!(prompt, "could not load quotes: {}", err)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
