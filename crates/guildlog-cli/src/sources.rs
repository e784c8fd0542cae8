//! File-backed stand-ins for the guild log feed and the name lookups.

use anyhow::{Context, Result};
use guildlog_engine::NameCatalog;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read the raw guild log document from `path`, or stdin for `None` / `-`
pub fn read_raw_logs(path: Option<&Path>) -> Result<Vec<Value>> {
    let content = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read guild log {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read guild log from stdin")?;
            buffer
        }
    };

    let records: Vec<Value> =
        serde_json::from_str(&content).context("guild log must be a JSON array of entries")?;
    tracing::info!(count = records.len(), "read guild log records");
    Ok(records)
}

/// Load a name catalog; no path means an empty catalog
pub fn load_catalog(path: Option<&Path>) -> Result<NameCatalog> {
    let Some(path) = path else {
        return Ok(NameCatalog::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read name catalog {}", path.display()))?;
    let catalog = NameCatalog::from_json_str(&content)
        .with_context(|| format!("invalid name catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), names = catalog.len(), "loaded name catalog");
    Ok(catalog)
}
