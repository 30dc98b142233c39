//! CSS theme handling for exports.

use std::path::Path;

use anyhow::{Result, anyhow};

/// Default light theme CSS.
pub const THEME_DEFAULT: &str = r#"
body {
    font-family: Georgia, 'Iowan Old Style', 'Palatino Linotype', serif;
    line-height: 1.6;
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem;
    color: #333;
}
h1 { border-bottom: 1px solid #eee; padding-bottom: 0.5rem; }
.metadata { color: #666; font-size: 0.9em; margin-bottom: 2rem; }
.group { margin-bottom: 3rem; }
.group .date { margin-bottom: 0.25rem; }
.labels { margin-bottom: 1rem; }
.label {
    display: inline-block;
    background: #eef;
    padding: 0.2rem 0.5rem;
    border-radius: 3px;
    margin-right: 0.25rem;
    font-size: 0.85em;
}
.authors summary { cursor: pointer; color: #0066cc; margin-bottom: 0.5rem; }
.list { list-style: none; padding: 0; }
.group-item {
    border-left: 3px solid #ddd;
    padding-left: 1rem;
    margin-bottom: 1rem;
}
.quote-text { white-space: pre-line; margin: 0; font-size: 1.1em; }
.quote-author { visibility: hidden; color: #666; margin: 0.25rem 0 0; font-style: italic; }
.authors[open] + .list .quote-author { visibility: visible; }
.empty { color: #666; }
"#;

/// Dark theme CSS.
pub const THEME_DARK: &str = r#"
body {
    font-family: Georgia, 'Iowan Old Style', 'Palatino Linotype', serif;
    line-height: 1.6;
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem;
    background: #1a1a1a;
    color: #e0e0e0;
}
h1 { border-bottom: 1px solid #333; padding-bottom: 0.5rem; }
.metadata { color: #888; font-size: 0.9em; margin-bottom: 2rem; }
.group { margin-bottom: 3rem; }
.group .date { margin-bottom: 0.25rem; }
.labels { margin-bottom: 1rem; }
.label {
    display: inline-block;
    background: #333;
    padding: 0.2rem 0.5rem;
    border-radius: 3px;
    margin-right: 0.25rem;
    font-size: 0.85em;
}
.authors summary { cursor: pointer; color: #6af; margin-bottom: 0.5rem; }
.list { list-style: none; padding: 0; }
.group-item {
    border-left: 3px solid #444;
    padding-left: 1rem;
    margin-bottom: 1rem;
}
.quote-text { white-space: pre-line; margin: 0; font-size: 1.1em; }
.quote-author { visibility: hidden; color: #aaa; margin: 0.25rem 0 0; font-style: italic; }
.authors[open] + .list .quote-author { visibility: visible; }
.empty { color: #888; }
"#;

/// Gets CSS for the specified theme.
///
/// # Arguments
///
/// * `theme` - Theme name ("default", "dark") or path to custom CSS file.
///   If None, returns the default theme.
///
/// # Errors
///
/// Returns an error if the theme name is unknown or the CSS file cannot be read.
pub fn get_theme_css(theme: Option<&str>) -> Result<String> {
    match theme {
        None | Some("default") => Ok(THEME_DEFAULT.to_string()),
        Some("dark") => Ok(THEME_DARK.to_string()),
        Some(path) => {
            let path = Path::new(path);
            if path.exists() {
                Ok(std::fs::read_to_string(path)?)
            } else {
                Err(anyhow!(
                    "Unknown theme: '{}'. Use 'default', 'dark', or a path to a CSS file.",
                    path.display()
                ))
            }
        }
    }
}
