use guildlog_decoder::decode_entries;
use guildlog_types::LogEntry;
use serde_json::Value;

use crate::error::Result;
use crate::message::render_entry;
use crate::references::extract_references;
use crate::resolve::{MissingNamePolicy, NameLookup, resolve_names};

/// Decode a raw batch and render every entry, failing on any unnamed id.
///
/// Line `i` of the output describes record `i` of `raw`.
pub async fn render<I, U>(raw: &[Value], item_lookup: &I, upgrade_lookup: &U) -> Result<Vec<String>>
where
    I: NameLookup,
    U: NameLookup,
{
    render_with_policy(raw, item_lookup, upgrade_lookup, MissingNamePolicy::default()).await
}

pub async fn render_with_policy<I, U>(
    raw: &[Value],
    item_lookup: &I,
    upgrade_lookup: &U,
    policy: MissingNamePolicy,
) -> Result<Vec<String>>
where
    I: NameLookup,
    U: NameLookup,
{
    let entries = decode_entries(raw)?;
    render_entries(&entries, item_lookup, upgrade_lookup, policy).await
}

/// Render already decoded entries
pub async fn render_entries<I, U>(
    entries: &[LogEntry],
    item_lookup: &I,
    upgrade_lookup: &U,
    policy: MissingNamePolicy,
) -> Result<Vec<String>>
where
    I: NameLookup,
    U: NameLookup,
{
    let references = extract_references(entries);
    let names = resolve_names(&references, item_lookup, upgrade_lookup, policy).await?;

    entries
        .iter()
        .map(|entry| render_entry(entry, &names))
        .collect()
}
