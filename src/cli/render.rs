//! Plain-text rendering of the selected quote group.

use std::io::{self, Write};

use crate::controller::{Labels, Renderer};
use crate::domain::{GroupView, Session};

/// Message shown when there is nothing to display.
pub const EMPTY_MESSAGE: &str = "No quotes found.";

/// Writes the selected group as text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    labels: Labels,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, labels: Labels) -> Self {
        Self { out, labels }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &GroupView<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", heading(view, self.labels))?;
        writeln!(self.out)?;

        for quote in &view.quotes {
            for line in quote.text.lines() {
                writeln!(self.out, "  {}", line)?;
            }
            if !quote.author.is_empty() {
                writeln!(self.out, "    - {}", quote.author)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, session: &Session) -> io::Result<()> {
        match session.view() {
            Some(view) => self.write_view(&view)?,
            None => writeln!(self.out, "{}", EMPTY_MESSAGE)?,
        }
        self.out.flush()
    }
}

/// Builds the heading line: date, enabled labels, then position.
fn heading(view: &GroupView<'_>, labels: Labels) -> String {
    let mut parts = Vec::new();
    if !view.date.is_empty() {
        parts.push(view.date.to_string());
    }
    if labels.group {
        parts.push(format!("Group {}", view.group));
    }
    if labels.count {
        let noun = if view.count == 1 { "quote" } else { "quotes" };
        parts.push(format!("{} {}", view.count, noun));
    }
    parts.push(format!("[{}/{}]", view.position, view.total));
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quote, group_quotes};
    use pretty_assertions::assert_eq;

    fn render(session: &Session, labels: Labels) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new(), labels);
        renderer.render(session).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn sample() -> Session {
        Session::loaded(group_quotes(vec![
            Quote::new("2024-01-15", 2, "Ada", "First quote", 0),
            Quote::new("2024-01-15", 2, "Grace", "Two\nlines", 1),
            Quote::new("2024-02-01", 1, "Linus", "Later", 2),
        ]))
    }

    #[test]
    fn empty_session_shows_message() {
        assert_eq!(
            render(&Session::default(), Labels::default()),
            "No quotes found.\n"
        );
    }

    #[test]
    fn renders_heading_and_quotes_without_authors() {
        let output = render(&sample(), Labels::default());

        assert_eq!(
            output,
            "2024-01-15  Group 2  2 quotes  [1/2]\n\n  First quote\n\n  Two\n  lines\n\n"
        );
    }

    #[test]
    fn renders_authors_when_toggled() {
        let output = render(&sample().toggle_authors(), Labels::default());

        assert!(output.contains("  First quote\n    - Ada\n"));
        assert!(output.contains("    - Grace\n"));
    }

    #[test]
    fn labels_can_be_disabled() {
        let labels = Labels {
            group: false,
            count: false,
        };
        let output = render(&sample().next(), labels);

        assert!(output.starts_with("2024-02-01  [2/2]\n"));
    }

    #[test]
    fn singular_count() {
        let output = render(&sample().next(), Labels::default());
        assert!(output.contains("1 quote  "));
    }

    #[test]
    fn empty_date_is_omitted_from_heading() {
        let session = Session::loaded(group_quotes(vec![Quote::new("", 1, "", "x", 0)]));
        let output = render(&session, Labels::default());

        assert!(output.starts_with("Group 1  1 quote  [1/1]\n"));
    }
}
