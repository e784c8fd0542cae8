//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GUILD_LOG: &str = r#"[
  {"id": 1, "time": "2024-01-01T00:00:00Z", "type": "joined", "user": "Ann"},
  {"id": 2, "time": "2024-01-01T00:10:00Z", "type": "treasury", "user": "Ann", "item_id": 19721, "count": 5},
  {"id": 3, "time": "2024-01-01T00:20:00Z", "type": "upgrade", "action": "queued", "upgrade_id": 38},
  {"id": 4, "time": "2024-01-01T00:30:00Z", "type": "stash", "user": "Bo", "operation": "deposit", "item_id": 0, "count": 0, "coins": 150}
]"#;

pub const ITEMS: &str = r#"[{"id": 19721, "name": "Mithril Ore"}]"#;

pub const UPGRADES: &str = r#"{"38": "Guild Vault"}"#;

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// `guildlog` isolated from the user's config and RUST_LOG
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("guildlog").expect("Failed to find guildlog binary");
        cmd.env("GUILDLOG_CONFIG", self.config_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
