//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic sheet creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod sheet;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::QuotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use sheet::TestSheet;
