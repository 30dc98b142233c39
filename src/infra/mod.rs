//! CSV parsing, row decoding, sheet sources, file output

mod csv;
mod decode;
mod fs;
mod source;

pub use csv::{Row, parse_csv};
pub use decode::{clean, decode_quotes, parse_group};
pub use fs::{WriteError, write_atomic};
pub use source::{
    DEFAULT_CACHE_BUST_PARAM, DEFAULT_SOURCE, FileSource, HttpSource, LoadError, QuoteSource,
    cache_busted_url, load_groups, open_source,
};
