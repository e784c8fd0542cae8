use crate::types::OutputFormat;
use anyhow::Result;
use guildlog_engine::{MissingNamePolicy, NameLookup};
use serde_json::Value;
use std::io::Write;

pub fn handle<I, U>(
    raw: &[Value],
    items: &I,
    upgrades: &U,
    policy: MissingNamePolicy,
    format: OutputFormat,
) -> Result<()>
where
    I: NameLookup,
    U: NameLookup,
{
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let lines = runtime.block_on(guildlog_engine::render_with_policy(
        raw, items, upgrades, policy,
    ))?;

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Plain => {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&lines)?)?;
        }
    }
    Ok(())
}
