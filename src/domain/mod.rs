//! Core types: Quote, QuoteGroup, Session

mod group;
mod quote;
mod session;

pub use group::{QuoteGroup, group_quotes};
pub use quote::{DEFAULT_GROUP, Quote};
pub use session::{GroupView, QuoteView, Session};
