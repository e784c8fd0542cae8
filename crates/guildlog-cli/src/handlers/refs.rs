use crate::types::OutputFormat;
use anyhow::Result;
use guildlog_decoder::decode_entries;
use guildlog_engine::extract_references;
use serde_json::Value;
use std::collections::BTreeSet;

pub fn handle(raw: &[Value], format: OutputFormat) -> Result<()> {
    let entries = decode_entries(raw)?;
    let references = extract_references(&entries);

    match format {
        OutputFormat::Plain => {
            println!("items: {}", join_ids(&references.items));
            println!("upgrades: {}", join_ids(&references.upgrades));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&references)?);
        }
    }
    Ok(())
}

fn join_ids(ids: &BTreeSet<u32>) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
