//! Builder for test quote sheets.

// Allow dead code since not every test crate uses every helper
#![allow(dead_code)]

/// Builder for CSV quote sheets with the standard header.
///
/// Fields are quoted the way spreadsheet exports do it: only when they
/// contain a comma, quote or line break.
#[derive(Debug, Default)]
pub struct TestSheet {
    rows: Vec<[String; 4]>,
    line_ending: &'static str,
}

impl TestSheet {
    /// Creates an empty sheet with LF line endings.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            line_ending: "\n",
        }
    }

    /// Adds a quote row.
    pub fn quote(mut self, date: &str, group: &str, author: &str, text: &str) -> Self {
        self.rows.push([
            date.to_string(),
            group.to_string(),
            author.to_string(),
            text.to_string(),
        ]);
        self
    }

    /// Switches to CRLF line endings.
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Renders the sheet as CSV text.
    pub fn to_csv(&self) -> String {
        let mut out = format!("date,group,author,text{}", self.line_ending);
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(|f| quote_field(f)).collect();
            out.push_str(&fields.join(","));
            out.push_str(self.line_ending);
        }
        out
    }
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_has_header() {
        assert_eq!(TestSheet::new().to_csv(), "date,group,author,text\n");
    }

    #[test]
    fn test_sheet_quotes_special_fields() {
        let csv = TestSheet::new()
            .quote("2024-01-01", "1", "A, B", "say \"hi\"")
            .crlf()
            .to_csv();
        assert!(csv.ends_with("2024-01-01,1,\"A, B\",\"say \"\"hi\"\"\"\r\n"));
    }
}
