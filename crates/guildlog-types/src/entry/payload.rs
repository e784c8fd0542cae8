use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier as used by the items endpoint
pub type ItemId = u32;

/// Guild upgrade identifier as used by the upgrades endpoint
pub type UpgradeId = u32;

/// Kind-specific content of a log entry
///
/// Marked non-exhaustive: consumers outside this crate keep a fallback arm,
/// so a kind added here later never silently disappears from their output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum LogPayload {
    /// A member joined the guild
    Joined(MemberPayload),

    /// A member was invited by another member
    Invited(InvitedPayload),

    /// An invited player declined the invitation
    InviteDeclined(MemberPayload),

    /// A member was kicked, or left on their own (kicked_by == user)
    Kick(KickPayload),

    RankChange(RankChangePayload),

    /// Items added to the treasury to fund upgrades
    Treasury(TreasuryPayload),

    /// Item or coin movement in the guild stash
    Stash(StashPayload),

    /// Message of the day changed
    Motd(MotdPayload),

    /// Upgrade lifecycle step
    Upgrade(UpgradePayload),

    /// Influence contributed by a group of members
    Influence(InfluencePayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitedPayload {
    pub user: String,
    pub invited_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickPayload {
    pub user: String,
    pub kicked_by: String,
}

impl KickPayload {
    /// A kick issued by the kicked member themself is how the feed records leaving
    pub fn is_self_departure(&self) -> bool {
        self.kicked_by == self.user
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankChangePayload {
    pub user: String,
    pub changed_by: String,
    pub old_rank: String,
    pub new_rank: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryPayload {
    pub user: String,
    pub item_id: ItemId,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StashOperation {
    Deposit,
    Withdraw,
    Move,
}

impl StashOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StashOperation::Deposit => "deposit",
            StashOperation::Withdraw => "withdraw",
            StashOperation::Move => "move",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "deposit" => Some(StashOperation::Deposit),
            "withdraw" => Some(StashOperation::Withdraw),
            "move" => Some(StashOperation::Move),
            _ => None,
        }
    }
}

impl fmt::Display for StashOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashPayload {
    pub user: String,
    pub operation: StashOperation,
    pub item_id: ItemId,
    pub count: u32,
    /// Copper moved; only meaningful when `count == 0`
    pub coins: u64,
}

impl StashPayload {
    /// Whether this record moved an item (as opposed to currency only).
    /// Moves between stash tabs always concern an item.
    pub fn moves_item(&self) -> bool {
        match self.operation {
            StashOperation::Move => true,
            StashOperation::Deposit | StashOperation::Withdraw => self.count > 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotdPayload {
    pub user: String,
    pub motd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePayload {
    pub upgrade_id: UpgradeId,
    #[serde(flatten)]
    pub action: UpgradeAction,
}

/// Upgrade lifecycle step.
///
/// Only queued records may lack a user, and only they carry no item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UpgradeAction {
    Queued {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<String>,
    },
    Completed(UpgradeItems),
    Cancelled(UpgradeItems),
    SpedUp(UpgradeItems),
}

impl UpgradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeAction::Queued { .. } => "queued",
            UpgradeAction::Completed(_) => "completed",
            UpgradeAction::Cancelled(_) => "cancelled",
            UpgradeAction::SpedUp(_) => "sped_up",
        }
    }

    pub fn user(&self) -> Option<&str> {
        match self {
            UpgradeAction::Queued { user } => user.as_deref(),
            UpgradeAction::Completed(items)
            | UpgradeAction::Cancelled(items)
            | UpgradeAction::SpedUp(items) => Some(&items.user),
        }
    }

    pub fn items(&self) -> Option<&UpgradeItems> {
        match self {
            UpgradeAction::Queued { .. } => None,
            UpgradeAction::Completed(items)
            | UpgradeAction::Cancelled(items)
            | UpgradeAction::SpedUp(items) => Some(items),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeItems {
    pub user: String,
    pub item_id: ItemId,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencePayload {
    /// Contributing members in feed order
    pub participants: Vec<String>,
}
