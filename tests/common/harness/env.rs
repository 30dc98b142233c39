//! Isolated test environment with temp directory.

// Allow dead code since not every test crate uses every helper
#![allow(dead_code)]

use super::{QuotesCommand, TestSheet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Holds a quote sheet and a config file path inside a temp directory that
/// is cleaned up on drop. Commands built from the environment never read the
/// user's real config.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the working directory
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path to the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the quote sheet used by `cmd()`.
    pub fn sheet_path(&self) -> PathBuf {
        self.root.join("quotes.csv")
    }

    /// Returns the path of the config file used by `cmd()`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the quote sheet.
    pub fn write_sheet(&self, sheet: &TestSheet) -> PathBuf {
        self.write_file("quotes.csv", &sheet.to_csv())
    }

    /// Writes the config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file("config.toml", contents)
    }

    /// Writes a file to the test environment and returns its path.
    ///
    /// Useful for raw CSV text, custom templates, CSS files, etc.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a QuotesCommand reading this environment's sheet and config.
    pub fn cmd(&self) -> QuotesCommand {
        QuotesCommand::new()
            .config(&self.config_path())
            .source(&self.sheet_path().to_string_lossy())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_writes_sheet() {
        let env = TestEnv::new();
        let path = env.write_sheet(&TestSheet::new().quote("2024-01-01", "1", "A", "Hi"));

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("2024-01-01,1,A,Hi"));
    }

    #[test]
    fn test_env_command_points_at_environment() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[2], "--source");
        assert_eq!(args[3], env.sheet_path().to_string_lossy());
    }
}
