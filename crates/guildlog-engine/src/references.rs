use guildlog_types::{ItemId, LogEntry, LogPayload, UpgradeId};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct ids a batch needs names for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct References {
    pub items: BTreeSet<ItemId>,
    pub upgrades: BTreeSet<UpgradeId>,
}

impl References {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.upgrades.is_empty()
    }

    fn collect(&mut self, entry: &LogEntry) {
        match &entry.payload {
            // Coin-only deposits and withdrawals have no item to name
            LogPayload::Stash(stash) if stash.moves_item() => {
                self.items.insert(stash.item_id);
            }
            LogPayload::Treasury(treasury) => {
                self.items.insert(treasury.item_id);
            }
            LogPayload::Upgrade(upgrade) => {
                self.upgrades.insert(upgrade.upgrade_id);
                if let Some(items) = upgrade.action.items() {
                    self.items.insert(items.item_id);
                }
            }
            _ => {}
        }
    }
}

/// Collect the item and upgrade ids referenced by `entries`
pub fn extract_references(entries: &[LogEntry]) -> References {
    let mut references = References::default();
    for entry in entries {
        references.collect(entry);
    }

    tracing::debug!(
        items = references.items.len(),
        upgrades = references.upgrades.len(),
        "extracted name references"
    );
    references
}
