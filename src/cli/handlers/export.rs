//! Handler for the `export` command.

use anyhow::{Context, Result};
use tracing::info;

use super::load_quote_groups;
use crate::cli::ExportArgs;
use crate::cli::config::Config;
use crate::export::{RenderOptions, render_page_html};
use crate::infra::write_atomic;

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, source: &str, config: &Config) -> Result<()> {
    let groups = load_quote_groups(source, config)?;

    let options = RenderOptions {
        title: Some(&args.title),
        template_path: args.template.as_deref(),
        theme: config.theme(args.theme.as_deref()),
        labels: config.labels,
        generated: None,
    };
    let html = render_page_html(&groups, &options)?;

    match &args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            write_atomic(output_path, &html)?;

            info!(path = %output_path.display(), groups = groups.len(), "exported quotes");
            println!(
                "Exported {} group(s) to {}",
                groups.len(),
                output_path.display()
            );
        }
        None => {
            print!("{}", html);
        }
    }

    Ok(())
}
