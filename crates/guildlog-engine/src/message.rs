use chrono::{DateTime, SecondsFormat, Utc};
use guildlog_types::*;

use crate::error::Result;
use crate::format::{format_currency, format_list};
use crate::resolve::NameTables;

/// Render one entry as `"[<timestamp>]: <message>."`
pub fn render_entry(entry: &LogEntry, names: &NameTables) -> Result<String> {
    let message = describe(entry, names)?;
    Ok(format!("[{}]: {}.", format_timestamp(&entry.time), message))
}

/// RFC 3339 in UTC with a `Z` suffix; sub-second digits only when present
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn describe(entry: &LogEntry, names: &NameTables) -> Result<String> {
    let message = match &entry.payload {
        LogPayload::Joined(p) => format!("{} joined the guild", p.user),
        LogPayload::Invited(p) => format!("{} invited {} in the guild", p.invited_by, p.user),
        LogPayload::InviteDeclined(p) => format!("{} declined the invitation", p.user),
        LogPayload::Kick(p) if p.is_self_departure() => format!("{} left the guild", p.user),
        LogPayload::Kick(p) => format!("{} kicked {} from the guild", p.kicked_by, p.user),
        LogPayload::RankChange(p) => format!(
            "{} changed the rank of {} from {} to {}",
            p.changed_by, p.user, p.old_rank, p.new_rank
        ),
        LogPayload::Motd(p) => format!("{} changed the MOTD to the following:\n{}", p.user, p.motd),
        LogPayload::Stash(p) => describe_stash(p, names)?,
        LogPayload::Treasury(p) => format!(
            "{} added {} × {} in the guild treasury",
            p.user,
            p.count,
            names.item_name(p.item_id)?
        ),
        LogPayload::Upgrade(p) => describe_upgrade(p, names)?,
        LogPayload::Influence(p) => {
            format!("{} added influence to the guild", format_list(&p.participants))
        }
        _ => fallback(entry),
    };
    Ok(message)
}

fn describe_stash(stash: &StashPayload, names: &NameTables) -> Result<String> {
    let user = &stash.user;
    let count = stash.count;

    let message = match stash.operation {
        StashOperation::Deposit if count > 0 => format!(
            "{} deposited {} × {} in the guild stash",
            user,
            count,
            names.item_name(stash.item_id)?
        ),
        StashOperation::Deposit => format!(
            "{} deposited {} coins in the guild stash",
            user,
            format_currency(stash.coins)
        ),
        StashOperation::Move => format!(
            "{} moved {} × {} in the guild stash",
            user,
            count,
            names.item_name(stash.item_id)?
        ),
        StashOperation::Withdraw if count > 0 => format!(
            "{} withdrew {} × {} from the guild stash",
            user,
            count,
            names.item_name(stash.item_id)?
        ),
        StashOperation::Withdraw => format!(
            "{} withdrew {} from the guild stash",
            user,
            format_currency(stash.coins)
        ),
    };
    Ok(message)
}

fn describe_upgrade(upgrade: &UpgradePayload, names: &NameTables) -> Result<String> {
    let (verb, items) = match &upgrade.action {
        UpgradeAction::Queued { user } => {
            let name = names.upgrade_name(upgrade.upgrade_id)?;
            return Ok(match user {
                Some(user) => format!("{} queued {}", user, name),
                None => format!("{} got queued", name),
            });
        }
        UpgradeAction::Completed(items) => ("completed", items),
        UpgradeAction::Cancelled(items) => ("cancelled", items),
        UpgradeAction::SpedUp(items) => ("sped up", items),
    };

    Ok(format!(
        "{} {} {} × {}",
        items.user,
        verb,
        items.count,
        names.item_name(items.item_id)?
    ))
}

/// Structural dump for payloads this renderer has no phrasing for
fn fallback(entry: &LogEntry) -> String {
    tracing::warn!(id = entry.id, kind = %entry.kind(), "no message format for entry");
    serde_json::to_string(entry).unwrap_or_else(|_| format!("{:?}", entry))
}
