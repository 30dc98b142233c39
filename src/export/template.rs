//! HTML template rendering for quote page exports.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use minijinja::{Environment, context};

use crate::controller::Labels;
use crate::domain::QuoteGroup;
use crate::export::theme::get_theme_css;

/// Template name; the `.html` suffix turns on HTML auto-escaping.
const TEMPLATE_NAME: &str = "page.html";

/// Default HTML template for the quote page.
///
/// Each group carries a `<details>` element right before its list; opening it
/// reveals the authors through the theme's CSS, with no scripting needed.
pub const DEFAULT_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <style>{{ theme_css|safe }}</style>
</head>
<body>
    <header>
        <h1>{{ title }}</h1>
        <p class="metadata">
            {{ groups|length }} {% if groups|length == 1 %}group{% else %}groups{% endif %}
            &middot; generated <time datetime="{{ generated_iso }}">{{ generated }}</time>
        </p>
    </header>
    <main>
    {% for g in groups %}
        <section class="group" id="group-{{ loop.index }}">
            {% if g.date %}<h2 class="date">{{ g.date }}</h2>{% endif %}
            <div class="labels">
                {% if labels.group %}<span class="label">Group {{ g.group }}</span>{% endif %}
                {% if labels.count %}<span class="label">{{ g.items|length }} {% if g.items|length == 1 %}quote{% else %}quotes{% endif %}</span>{% endif %}
            </div>
            <details class="authors"><summary>Show authors</summary></details>
            <ul class="list">
                {% for q in g.items %}
                <li class="group-item">
                    <p class="quote-text">{{ q.text }}</p>
                    <p class="quote-author">{{ q.author }}</p>
                </li>
                {% endfor %}
            </ul>
        </section>
    {% else %}
        <ul class="list"><li class="group-item empty">No quotes found.</li></ul>
    {% endfor %}
    </main>
</body>
</html>"##;

/// Options for rendering the quote page.
#[derive(Default)]
pub struct RenderOptions<'a> {
    /// Page title; "Quotes" when unset.
    pub title: Option<&'a str>,
    /// Path to custom template file.
    pub template_path: Option<&'a Path>,
    /// Theme name or path to CSS file.
    pub theme: Option<&'a str>,
    /// Which labels to show per group.
    pub labels: Labels,
    /// Generation timestamp; now when unset.
    pub generated: Option<DateTime<Utc>>,
}

/// Renders every group into one HTML document.
///
/// Quote text, authors and dates are HTML-escaped. An empty group list
/// renders the "No quotes found." state.
pub fn render_page_html(groups: &[QuoteGroup], options: &RenderOptions) -> Result<String> {
    let theme_css = get_theme_css(options.theme)?;

    let template_str = match options.template_path {
        Some(p) => std::fs::read_to_string(p)?,
        None => DEFAULT_PAGE_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, &template_str)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let generated = options.generated.unwrap_or_else(Utc::now);

    let html = tmpl.render(context! {
        title => options.title.unwrap_or("Quotes"),
        theme_css => theme_css,
        groups => groups,
        labels => options.labels,
        generated => generated.format("%Y-%m-%d").to_string(),
        generated_iso => generated.to_rfc3339(),
    })?;

    Ok(html)
}
