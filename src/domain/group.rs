//! Grouping quotes by (date, group number).

use std::collections::BTreeMap;

use serde::Serialize;

use super::quote::Quote;

/// Quotes sharing one date and group number, shown together as one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteGroup {
    pub date: String,
    pub group: i64,
    /// Quotes in sheet order.
    pub items: Vec<Quote>,
}

impl QuoteGroup {
    /// Number of quotes in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collects quotes into groups ordered by date, then group number.
///
/// Dates compare as plain text, so an empty date sorts first and `2024-1-5`
/// sorts after `2024-01-15`. Each key appears exactly once in the result and
/// quotes inside a group stay in `source_order`, however the input was
/// permuted.
///
/// # Example
///
/// ```
/// use quoteboard::domain::{Quote, group_quotes};
///
/// let groups = group_quotes(vec![
///     Quote::new("2024-02-01", 1, "", "later", 0),
///     Quote::new("2024-01-15", 1, "", "earlier", 1),
/// ]);
/// assert_eq!(groups[0].date, "2024-01-15");
/// assert_eq!(groups[1].date, "2024-02-01");
/// ```
pub fn group_quotes(quotes: Vec<Quote>) -> Vec<QuoteGroup> {
    let mut by_key: BTreeMap<(String, i64), Vec<Quote>> = BTreeMap::new();
    for quote in quotes {
        by_key
            .entry((quote.date.clone(), quote.group))
            .or_default()
            .push(quote);
    }

    by_key
        .into_iter()
        .map(|((date, group), mut items)| {
            items.sort_by_key(|q| q.source_order);
            QuoteGroup { date, group, items }
        })
        .collect()
}
