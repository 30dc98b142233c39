//! A single decoded quote entry.

use serde::Serialize;

/// Group number used when the sheet has no usable value.
pub const DEFAULT_GROUP: i64 = 1;

/// One quote decoded from a data row of the sheet.
///
/// Quotes have no primary key. Identity is positional: `source_order` is the
/// row's index among the sheet's data rows and is what keeps quotes in sheet
/// order once they are grouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Date label, compared as plain text.
    pub date: String,
    /// Sub-group within the date.
    pub group: i64,
    /// Author, possibly empty.
    pub author: String,
    /// The quote itself. Never empty.
    pub text: String,
    #[serde(skip)]
    pub source_order: usize,
}

impl Quote {
    /// Creates a quote at the given sheet position.
    pub fn new(
        date: impl Into<String>,
        group: i64,
        author: impl Into<String>,
        text: impl Into<String>,
        source_order: usize,
    ) -> Self {
        Self {
            date: date.into(),
            group,
            author: author.into(),
            text: text.into(),
            source_order,
        }
    }
}
