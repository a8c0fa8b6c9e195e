use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file written into its own temporary directory.
pub struct TempConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    pub fn write(contents: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Path for a database file next to the config.
    pub fn database_path(&self) -> String {
        self.dir.path().join("scorewatch.db").display().to_string()
    }
}

/// Minimal valid config that needs no secrets.
pub fn log_only(database: &str) -> String {
    format!("database = \"{database}\"\n\n[notifier]\nkind = \"log\"\n")
}
