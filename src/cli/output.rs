//! Output formats shared by `show` and `ls`.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::QuoteGroup;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for reading in a terminal (default)
    #[default]
    Human,
    /// Pretty-printed JSON wrapped in a `data` field
    Json,
}

/// JSON envelope: every command prints `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Serializes the envelope for printing.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One row of `ls` output.
#[derive(Debug, Serialize)]
pub struct GroupListing {
    /// 1-based, the same number `show --position` accepts.
    pub position: usize,
    pub date: String,
    pub group: i64,
    pub count: usize,
}

impl GroupListing {
    pub fn new(position: usize, group: &QuoteGroup) -> Self {
        Self {
            position,
            date: group.date.clone(),
            group: group.group,
            count: group.len(),
        }
    }
}
