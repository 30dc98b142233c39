//! List command handler.

use anyhow::Result;

use super::load_quote_groups;
use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{GroupListing, Output, OutputFormat};
use crate::cli::render::EMPTY_MESSAGE;
use crate::domain::QuoteGroup;

pub fn handle_list(args: &ListArgs, source: &str, config: &Config) -> Result<()> {
    let groups = load_quote_groups(source, config)?;

    match args.format {
        OutputFormat::Human => {
            if groups.is_empty() {
                println!("{}", EMPTY_MESSAGE);
            } else {
                print!("{}", format_table(&groups));
                println!();
                println!("{} group(s)", groups.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", Output::new(listings(&groups)).to_json()?);
        }
    }

    Ok(())
}

pub(crate) fn listings(groups: &[QuoteGroup]) -> Vec<GroupListing> {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| GroupListing::new(i + 1, g))
        .collect()
}

pub(crate) fn format_table(groups: &[QuoteGroup]) -> String {
    let mut out = format!("{:>4}  {:<12}  {:>5}  {:>6}\n", "#", "Date", "Group", "Quotes");
    out.push_str(&format!(
        "{:>4}  {:<12}  {:>5}  {:>6}\n",
        "----", "------------", "-----", "------"
    ));
    for listing in listings(groups) {
        out.push_str(&format!(
            "{:>4}  {:<12}  {:>5}  {:>6}\n",
            listing.position, listing.date, listing.group, listing.count
        ));
    }
    out
}
