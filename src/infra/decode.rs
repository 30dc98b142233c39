//! Decoding parsed CSV rows into quotes.

use tracing::debug;

use crate::domain::{DEFAULT_GROUP, Quote};
use crate::infra::csv::Row;

const BOM: char = '\u{FEFF}';

/// Strips one leading byte-order mark and surrounding whitespace.
pub fn clean(field: &str) -> &str {
    field.strip_prefix(BOM).unwrap_or(field).trim()
}

/// Column positions located in the header row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Columns {
    date: Option<usize>,
    group: Option<usize>,
    author: Option<usize>,
    text: Option<usize>,
}

impl Columns {
    fn from_header(header: &Row) -> Self {
        let names: Vec<String> = header.iter().map(|h| clean(h).to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|n| n == name);

        Self {
            date: find("date"),
            group: find("group"),
            author: find("author"),
            text: find("text"),
        }
    }
}

/// Decodes rows into quotes using the first non-blank row as the header.
///
/// Header names are matched case-insensitively; `date`, `group`, `author` and
/// `text` are recognized and anything else is ignored. A missing column, or a
/// row too short to reach it, decodes to the default: empty text, or group 1.
/// Quotes whose text is empty are dropped, but they still consume a
/// `source_order` position.
pub fn decode_quotes(rows: &[Row]) -> Vec<Quote> {
    let mut rows = rows
        .iter()
        .filter(|r| r.iter().any(|field| !clean(field).is_empty()));

    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns = Columns::from_header(header);
    debug!(?columns, "located header columns");

    let field = |row: &Row, column: Option<usize>| -> Option<String> {
        column
            .and_then(|i| row.get(i))
            .map(|value| clean(value).to_string())
    };

    rows.enumerate()
        .map(|(source_order, row)| Quote {
            date: field(row, columns.date).unwrap_or_default(),
            group: field(row, columns.group)
                .and_then(|g| parse_group(&g))
                .unwrap_or(DEFAULT_GROUP),
            author: field(row, columns.author).unwrap_or_default(),
            text: field(row, columns.text).unwrap_or_default(),
            source_order,
        })
        .filter(|quote| !quote.text.is_empty())
        .collect()
}

/// Parses the leading integer of a group cell.
///
/// An optional sign followed by at least one digit is a successful parse and
/// any trailing characters are ignored, so `"2b"` is group 2. Returns `None`
/// when there are no leading digits or the value overflows.
pub fn parse_group(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
