//! Quote-aware CSV tokenizer.
//!
//! The parser is total: every input produces some row structure and nothing
//! here can fail. Malformed quoting degrades to a best-effort split instead of
//! an error, which is what a hand-edited quote sheet needs.

/// One parsed line of CSV data.
pub type Row = Vec<String>;

/// Splits CSV text into rows of unescaped fields.
///
/// - `"` outside a field enters quote mode, `""` inside it is a literal quote
/// - quoted fields may span lines; `\r\n`, `\n` and bare `\r` all end a row
/// - blank lines never produce rows, but `,` alone yields two empty fields
/// - an unterminated quote swallows the rest of the input
///
/// # Example
///
/// ```
/// use quoteboard::infra::parse_csv;
///
/// let rows = parse_csv("a,\"b,c\"\r\n\"say \"\"hi\"\"\"\n");
/// assert_eq!(rows, vec![vec!["a", "b,c"], vec!["say \"hi\""]]);
/// ```
pub fn parse_csv(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row: Row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\n' | '\r' => {
                if !field.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
