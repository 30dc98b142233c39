//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `quotes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct QuotesCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl QuotesCommand {
    /// Creates a new command for the `quotes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--source` option.
    pub fn source(self, location: &str) -> Self {
        self.args(["--source", location])
    }

    /// Sets the `--config` option.
    pub fn config(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["--config", path.as_str()])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds text to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("quotes").expect("Failed to find quotes binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `show` command.
    pub fn show(self) -> Self {
        self.args(["show"])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `browse` command.
    pub fn browse(self) -> Self {
        self.args(["browse"])
    }

    /// Configures for the `export` command.
    pub fn export(self) -> Self {
        self.args(["export"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for QuotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        QuotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_source() {
        let cmd = QuotesCommand::new().source("sheet.csv");
        let args = cmd.get_args();
        assert_eq!(args[0], "--source");
        assert_eq!(args[1], "sheet.csv");
    }

    #[test]
    fn test_command_output_success() {
        let output = QuotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("quotes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = QuotesCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
