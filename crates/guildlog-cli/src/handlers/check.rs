use crate::types::OutputFormat;
use anyhow::Result;
use guildlog_decoder::decode_entries;
use guildlog_types::{LogEntry, LogKind};
use serde_json::{Value, json};

pub fn handle(raw: &[Value], format: OutputFormat) -> Result<()> {
    let entries = decode_entries(raw)?;
    let counts = count_by_kind(&entries);

    match format {
        OutputFormat::Plain => {
            for (kind, count) in &counts {
                println!("{:<16} {}", kind.as_str(), count);
            }
            println!("{:<16} {}", "total", entries.len());
        }
        OutputFormat::Json => {
            let kinds: Vec<Value> = counts
                .iter()
                .map(|(kind, count)| json!({"kind": kind, "count": count}))
                .collect();
            let report = json!({"total": entries.len(), "kinds": kinds});
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Entry count per kind, in order of first appearance
fn count_by_kind(entries: &[LogEntry]) -> Vec<(LogKind, usize)> {
    let mut counts: Vec<(LogKind, usize)> = Vec::new();
    for entry in entries {
        let kind = entry.kind();
        match counts.iter_mut().find(|(seen, _)| *seen == kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((kind, 1)),
        }
    }
    counts
}
