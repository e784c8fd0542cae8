use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::LogKind;
use super::payload::LogPayload;

/// One decoded guild log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry ID, unique within a guild
    pub id: u64,

    /// Entry timestamp (UTC)
    pub time: DateTime<Utc>,

    /// Entry type and content (flattened enum)
    #[serde(flatten)]
    pub payload: LogPayload,
}

impl LogEntry {
    pub fn new(id: u64, time: DateTime<Utc>, payload: LogPayload) -> Self {
        Self { id, time, payload }
    }

    pub fn kind(&self) -> LogKind {
        match &self.payload {
            LogPayload::Joined(_) => LogKind::Joined,
            LogPayload::Invited(_) => LogKind::Invited,
            LogPayload::InviteDeclined(_) => LogKind::InviteDeclined,
            LogPayload::Kick(_) => LogKind::Kick,
            LogPayload::RankChange(_) => LogKind::RankChange,
            LogPayload::Treasury(_) => LogKind::Treasury,
            LogPayload::Stash(_) => LogKind::Stash,
            LogPayload::Motd(_) => LogKind::Motd,
            LogPayload::Upgrade(_) => LogKind::Upgrade,
            LogPayload::Influence(_) => LogKind::Influence,
        }
    }

    /// The member the feed attributes the entry to (its `user` field).
    /// Influence entries and user-less upgrade queues have none.
    pub fn acting_user(&self) -> Option<&str> {
        match &self.payload {
            LogPayload::Joined(p) | LogPayload::InviteDeclined(p) => Some(&p.user),
            LogPayload::Invited(p) => Some(&p.user),
            LogPayload::Kick(p) => Some(&p.user),
            LogPayload::RankChange(p) => Some(&p.user),
            LogPayload::Treasury(p) => Some(&p.user),
            LogPayload::Stash(p) => Some(&p.user),
            LogPayload::Motd(p) => Some(&p.user),
            LogPayload::Upgrade(p) => p.action.user(),
            LogPayload::Influence(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::payload::*;
    use chrono::TimeZone;

    fn at_new_year(payload: LogPayload) -> LogEntry {
        LogEntry::new(7, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), payload)
    }

    #[test]
    fn test_serialization_is_flat() {
        let entry = at_new_year(LogPayload::Joined(MemberPayload {
            user: "Ann.1234".to_string(),
        }));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "joined");
        assert_eq!(json["user"], "Ann.1234");
        assert_eq!(json["id"], 7);

        let back: LogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_upgrade_serialization_carries_action() {
        let entry = at_new_year(LogPayload::Upgrade(UpgradePayload {
            upgrade_id: 38,
            action: UpgradeAction::SpedUp(UpgradeItems {
                user: "Bo.5678".to_string(),
                item_id: 70701,
                count: 2,
            }),
        }));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "upgrade");
        assert_eq!(json["action"], "sped_up");
        assert_eq!(json["upgrade_id"], 38);
        assert_eq!(json["item_id"], 70701);
    }

    #[test]
    fn test_acting_user() {
        let queued = at_new_year(LogPayload::Upgrade(UpgradePayload {
            upgrade_id: 1,
            action: UpgradeAction::Queued { user: None },
        }));
        assert_eq!(queued.acting_user(), None);
        assert_eq!(queued.kind(), LogKind::Upgrade);

        let influence = at_new_year(LogPayload::Influence(InfluencePayload {
            participants: vec!["Ann".to_string()],
        }));
        assert_eq!(influence.acting_user(), None);

        let kick = at_new_year(LogPayload::Kick(KickPayload {
            user: "Cy".to_string(),
            kicked_by: "Cy".to_string(),
        }));
        assert_eq!(kick.acting_user(), Some("Cy"));
        assert_eq!(kick.kind(), LogKind::Kick);
    }

    #[test]
    fn test_stash_moves_item() {
        let mut stash = StashPayload {
            user: "Ann".to_string(),
            operation: StashOperation::Deposit,
            item_id: 0,
            count: 0,
            coins: 150,
        };
        assert!(!stash.moves_item());

        stash.operation = StashOperation::Move;
        assert!(stash.moves_item());

        stash.operation = StashOperation::Withdraw;
        stash.count = 3;
        assert!(stash.moves_item());
    }
}
