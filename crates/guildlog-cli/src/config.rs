use anyhow::{Context, Result};
use guildlog_engine::MissingNamePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GUILDLOG_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (e.g. ~/.config/guildlog/config.toml)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("GUILDLOG_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("guildlog").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Where the name catalogs live and how unresolved ids are treated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<PathBuf>,

    #[serde(default)]
    pub on_missing_name: MissingNamePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub names: NamesConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the resolved path, or defaults when there is none
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn items_path(&self) -> Option<PathBuf> {
        self.names
            .items
            .as_ref()
            .map(|path| expand_tilde(&path.to_string_lossy()))
    }

    pub fn upgrades_path(&self) -> Option<PathBuf> {
        self.names
            .upgrades
            .as_ref()
            .map(|path| expand_tilde(&path.to_string_lossy()))
    }
}
