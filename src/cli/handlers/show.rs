//! Handler for the `show` command.

use anyhow::{Result, bail};
use std::io;

use super::load_quote_groups;
use crate::cli::ShowArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::render::TerminalRenderer;
use crate::controller::Renderer;
use crate::domain::Session;

pub fn handle_show(args: &ShowArgs, source: &str, config: &Config) -> Result<()> {
    let session = select(Session::loaded(load_quote_groups(source, config)?), args)?;

    match args.format {
        OutputFormat::Human => {
            let mut renderer = TerminalRenderer::new(io::stdout().lock(), config.labels);
            renderer.render(&session)?;
        }
        OutputFormat::Json => {
            println!("{}", Output::new(session.view()).to_json()?);
        }
    }

    Ok(())
}

/// Applies the position, shuffle and author flags to a fresh session.
fn select(session: Session, args: &ShowArgs) -> Result<Session> {
    let total = session.groups().len();
    let session = match args.position {
        Some(position) => match session.select(position) {
            Some(selected) => selected,
            None => bail!("no group at position {} ({} groups loaded)", position, total),
        },
        None if args.shuffle => session.shuffle(&mut rand::thread_rng()),
        None => session,
    };

    Ok(if args.authors {
        session.toggle_authors()
    } else {
        session
    })
}
