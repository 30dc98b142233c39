//! Export of the grouped quotes as a standalone HTML page.
//!
//! Supports a built-in or custom template and CSS themes.

pub mod template;
mod theme;

pub use template::{DEFAULT_PAGE_TEMPLATE, RenderOptions, render_page_html};
pub use theme::{THEME_DARK, THEME_DEFAULT, get_theme_css};
