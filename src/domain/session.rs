//! Browsing state over a loaded group list.
//!
//! Every transition consumes the session and returns the next one, so the
//! navigation rules are plain functions that can be tested without any
//! presentation layer attached.

use rand::Rng;
use serde::Serialize;

use super::group::QuoteGroup;

/// The loaded groups plus the current selection and author visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    groups: Vec<QuoteGroup>,
    index: usize,
    show_authors: bool,
}

impl Session {
    /// Starts a session on the first group with authors hidden.
    pub fn loaded(groups: Vec<QuoteGroup>) -> Self {
        Self {
            groups,
            index: 0,
            show_authors: false,
        }
    }

    pub fn groups(&self) -> &[QuoteGroup] {
        &self.groups
    }

    /// Zero-based index of the selected group.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_authors(&self) -> bool {
        self.show_authors
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The selected group, or `None` when nothing is loaded.
    pub fn current(&self) -> Option<&QuoteGroup> {
        self.groups.get(self.index)
    }

    /// Selects the following group, wrapping to the first.
    pub fn next(self) -> Self {
        let len = self.groups.len();
        if len == 0 {
            return self;
        }
        let index = (self.index + 1) % len;
        self.select_index(index)
    }

    /// Selects the preceding group, wrapping to the last.
    pub fn previous(self) -> Self {
        let len = self.groups.len();
        if len == 0 {
            return self;
        }
        let index = (self.index + len - 1) % len;
        self.select_index(index)
    }

    /// Selects a uniformly random group. The current one may be picked again.
    pub fn shuffle<R: Rng>(self, rng: &mut R) -> Self {
        let len = self.groups.len();
        if len == 0 {
            return self;
        }
        let index = rng.gen_range(0..len);
        self.select_index(index)
    }

    /// Selects the group at a 1-based position.
    ///
    /// Returns `None` if the position is outside the list.
    pub fn select(self, position: usize) -> Option<Self> {
        if position == 0 || position > self.groups.len() {
            return None;
        }
        Some(self.select_index(position - 1))
    }

    /// Flips author visibility without moving the selection.
    pub fn toggle_authors(mut self) -> Self {
        self.show_authors = !self.show_authors;
        self
    }

    fn select_index(mut self, index: usize) -> Self {
        self.index = index;
        self.show_authors = false;
        self
    }

    /// Projects the selected group into what a renderer displays.
    pub fn view(&self) -> Option<GroupView<'_>> {
        let group = self.current()?;
        let quotes = group
            .items
            .iter()
            .map(|q| QuoteView {
                text: &q.text,
                author: if self.show_authors { q.author.as_str() } else { "" },
            })
            .collect();

        Some(GroupView {
            date: &group.date,
            group: group.group,
            count: group.len(),
            position: self.index + 1,
            total: self.groups.len(),
            show_authors: self.show_authors,
            quotes,
        })
    }
}

/// Display-ready projection of the selected group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView<'a> {
    pub date: &'a str,
    pub group: i64,
    pub count: usize,
    /// 1-based position in the group list.
    pub position: usize,
    pub total: usize,
    pub show_authors: bool,
    pub quotes: Vec<QuoteView<'a>>,
}

/// A quote as displayed; `author` is blank while authors are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView<'a> {
    pub text: &'a str,
    pub author: &'a str,
}
