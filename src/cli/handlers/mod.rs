//! Command handlers for the CLI.

mod browse;
mod completions;
mod export;
mod list;
mod show;

use anyhow::{Context, Result};

use crate::domain::QuoteGroup;
use crate::infra::{load_groups, open_source};

use super::config::Config;

// Re-export public items
pub use browse::{BrowseCommand, handle_browse, run_browse};
pub use completions::handle_completions;
pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;

// ===========================================
// Shared Utilities
// ===========================================

/// Loads and groups the sheet once, for the non-interactive commands.
pub(crate) fn load_quote_groups(location: &str, config: &Config) -> Result<Vec<QuoteGroup>> {
    let context = || format!("failed to load quotes from {}", location);
    let source = open_source(location, config.cache_bust_param()).with_context(context)?;
    load_groups(&source, false).with_context(context)
}
