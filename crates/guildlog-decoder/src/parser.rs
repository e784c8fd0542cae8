use guildlog_types::*;
use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::fields::*;

/// Decode a JSON array document (the body of the guild log endpoint)
pub fn decode_str(content: &str) -> Result<Vec<LogEntry>> {
    let records: Vec<Value> = serde_json::from_str(content)?;
    decode_entries(&records)
}

/// Decode a batch of raw records, preserving order.
///
/// All-or-nothing: the first bad record fails the whole batch.
pub fn decode_entries(records: &[Value]) -> Result<Vec<LogEntry>> {
    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if !record.is_object() {
                return Err(DecodeError::NotAnObject { index: Some(index) });
            }
            decode_entry(record)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = entries.len(), "decoded guild log batch");
    Ok(entries)
}

/// Decode a single raw record
pub fn decode_entry(record: &Value) -> Result<LogEntry> {
    let object = record
        .as_object()
        .ok_or(DecodeError::NotAnObject { index: None })?;
    let mut fields = RecordFields::new(object);

    let tag = fields.required_str(TYPE)?;
    let kind = LogKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownKind {
        tag: tag.to_string(),
        id: fields.id(),
    })?;
    fields.set_kind(kind);

    let id = fields.required_u64(ID)?;
    let time = fields.required_timestamp(TIME)?;

    let payload = match kind {
        LogKind::Joined => LogPayload::Joined(parse_member(&fields)?),
        LogKind::Invited => LogPayload::Invited(parse_invited(&fields)?),
        LogKind::InviteDeclined => LogPayload::InviteDeclined(parse_member(&fields)?),
        LogKind::Kick => LogPayload::Kick(parse_kick(&fields)?),
        LogKind::RankChange => LogPayload::RankChange(parse_rank_change(&fields)?),
        LogKind::Treasury => LogPayload::Treasury(parse_treasury(&fields)?),
        LogKind::Stash => LogPayload::Stash(parse_stash(&fields)?),
        LogKind::Motd => LogPayload::Motd(parse_motd(&fields)?),
        LogKind::Upgrade => LogPayload::Upgrade(parse_upgrade(&fields)?),
        LogKind::Influence => LogPayload::Influence(parse_influence(&fields)?),
    };

    Ok(LogEntry::new(id, time, payload))
}

fn parse_member(fields: &RecordFields) -> Result<MemberPayload> {
    Ok(MemberPayload {
        user: fields.required_string(USER)?,
    })
}

fn parse_invited(fields: &RecordFields) -> Result<InvitedPayload> {
    Ok(InvitedPayload {
        user: fields.required_string(USER)?,
        invited_by: fields.required_string(INVITED_BY)?,
    })
}

fn parse_kick(fields: &RecordFields) -> Result<KickPayload> {
    Ok(KickPayload {
        user: fields.required_string(USER)?,
        kicked_by: fields.required_string(KICKED_BY)?,
    })
}

fn parse_rank_change(fields: &RecordFields) -> Result<RankChangePayload> {
    Ok(RankChangePayload {
        user: fields.required_string(USER)?,
        changed_by: fields.required_string(CHANGED_BY)?,
        old_rank: fields.required_string(OLD_RANK)?,
        new_rank: fields.required_string(NEW_RANK)?,
    })
}

fn parse_treasury(fields: &RecordFields) -> Result<TreasuryPayload> {
    Ok(TreasuryPayload {
        user: fields.required_string(USER)?,
        item_id: fields.required_u32(ITEM_ID)?,
        count: fields.required_u32(COUNT)?,
    })
}

fn parse_stash(fields: &RecordFields) -> Result<StashPayload> {
    let tag = fields.required_str(OPERATION)?;
    let operation = StashOperation::from_tag(tag).ok_or_else(|| DecodeError::InvalidField {
        field: OPERATION.name,
        id: fields.id(),
        reason: format!("unknown stash operation '{}'", tag),
    })?;

    Ok(StashPayload {
        user: fields.required_string(USER)?,
        operation,
        item_id: fields.required_u32(ITEM_ID)?,
        count: fields.required_u32(COUNT)?,
        coins: fields.required_u64(COINS)?,
    })
}

fn parse_motd(fields: &RecordFields) -> Result<MotdPayload> {
    Ok(MotdPayload {
        user: fields.required_string(USER)?,
        motd: fields.required_string(MOTD)?,
    })
}

fn parse_upgrade(fields: &RecordFields) -> Result<UpgradePayload> {
    let upgrade_id = fields.required_u32(UPGRADE_ID)?;

    let action = match fields.required_str(ACTION)? {
        "queued" => UpgradeAction::Queued {
            user: fields.optional_str(USER)?.map(str::to_string),
        },
        "completed" => UpgradeAction::Completed(parse_upgrade_items(fields)?),
        "cancelled" => UpgradeAction::Cancelled(parse_upgrade_items(fields)?),
        "sped_up" => UpgradeAction::SpedUp(parse_upgrade_items(fields)?),
        other => {
            return Err(DecodeError::InvalidField {
                field: ACTION.name,
                id: fields.id(),
                reason: format!("unknown upgrade action '{}'", other),
            });
        }
    };

    Ok(UpgradePayload { upgrade_id, action })
}

fn parse_upgrade_items(fields: &RecordFields) -> Result<UpgradeItems> {
    Ok(UpgradeItems {
        user: fields.required_string(USER)?,
        item_id: fields.required_u32(ITEM_ID)?,
        count: fields.required_u32(COUNT)?,
    })
}

fn parse_influence(fields: &RecordFields) -> Result<InfluencePayload> {
    Ok(InfluencePayload {
        participants: fields.string_list(PARTICIPANTS)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_kind_is_reported_before_other_fields() {
        let err = decode_entry(&json!({"id": 9, "type": "unknown_kind"})).unwrap_err();
        match err {
            DecodeError::UnknownKind { tag, id } => {
                assert_eq!(tag, "unknown_kind");
                assert_eq!(id, Some(9));
            }
            other => panic!("expected UnknownKind, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_type() {
        let err = decode_entry(&json!({"id": 9, "time": "2024-01-01T00:00:00Z"})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField {
                field: "type",
                kind: None,
                id: Some(9)
            }
        ));
    }

    #[test]
    fn test_unknown_stash_operation() {
        let err = decode_entry(&json!({
            "id": 1, "time": "2024-01-01T00:00:00Z", "type": "stash",
            "user": "Ann", "operation": "steal", "item_id": 1, "count": 1, "coins": 0
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidField {
                field: "operation",
                ..
            }
        ));
    }

    #[test]
    fn test_queued_upgrade_ignores_item_fields() {
        let entry = decode_entry(&json!({
            "id": 1, "time": "2024-01-01T00:00:00Z", "type": "upgrade",
            "action": "queued", "upgrade_id": 55, "item_id": 12, "count": 1
        }))
        .unwrap();

        match entry.payload {
            LogPayload::Upgrade(upgrade) => {
                assert_eq!(upgrade.upgrade_id, 55);
                assert_eq!(upgrade.action, UpgradeAction::Queued { user: None });
            }
            other => panic!("expected upgrade, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_in_batch_reports_index() {
        let records = vec![
            json!({"id": 1, "time": "2024-01-01T00:00:00Z", "type": "joined", "user": "Ann"}),
            json!("oops"),
        ];
        assert!(matches!(
            decode_entries(&records),
            Err(DecodeError::NotAnObject { index: Some(1) })
        ));
    }

    #[test]
    fn test_standalone_non_object_has_no_index() {
        let err = decode_entry(&json!(["not", "a", "record"])).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { index: None }));
        assert_eq!(err.to_string(), "log record is not a JSON object");
    }
}
