use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator of a guild log record (the `type` field of the raw feed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Joined,
    Invited,
    InviteDeclined,
    Kick,
    RankChange,
    Treasury,
    Stash,
    Motd,
    Upgrade,
    Influence,
}

impl LogKind {
    pub const ALL: [LogKind; 10] = [
        LogKind::Joined,
        LogKind::Invited,
        LogKind::InviteDeclined,
        LogKind::Kick,
        LogKind::RankChange,
        LogKind::Treasury,
        LogKind::Stash,
        LogKind::Motd,
        LogKind::Upgrade,
        LogKind::Influence,
    ];

    /// Wire tag as it appears in the feed
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Joined => "joined",
            LogKind::Invited => "invited",
            LogKind::InviteDeclined => "invite_declined",
            LogKind::Kick => "kick",
            LogKind::RankChange => "rank_change",
            LogKind::Treasury => "treasury",
            LogKind::Stash => "stash",
            LogKind::Motd => "motd",
            LogKind::Upgrade => "upgrade",
            LogKind::Influence => "influence",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in LogKind::ALL {
            assert_eq!(LogKind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(LogKind::from_tag("unknown_kind"), None);
        assert_eq!(LogKind::from_tag("Joined"), None);
    }

    #[test]
    fn test_serde_matches_wire_tag() {
        for kind in LogKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }
}
