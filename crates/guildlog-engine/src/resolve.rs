use guildlog_types::{ItemId, UpgradeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;

use crate::error::{Error, NameKind, Result};
use crate::references::References;

/// Batched id → name lookup, provided by the caller (an API client, a
/// local catalog, a test double).
///
/// Implementations return names for the ids they know; ids left out of the
/// returned map are handled by the resolver according to its policy.
pub trait NameLookup {
    fn lookup(
        &self,
        ids: &BTreeSet<u32>,
    ) -> impl Future<Output = anyhow::Result<HashMap<u32, String>>> + Send;
}

/// What to do with a requested id the lookup did not name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Abort the run with a resolution error
    #[default]
    Fail,
    /// Substitute `item_id(<id>)` / `upgrade_id(<id>)`
    Placeholder,
}

/// Read-only name tables for one rendering run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTables {
    items: HashMap<ItemId, String>,
    upgrades: HashMap<UpgradeId, String>,
}

impl NameTables {
    pub fn new(items: HashMap<ItemId, String>, upgrades: HashMap<UpgradeId, String>) -> Self {
        Self { items, upgrades }
    }

    pub fn item_name(&self, id: ItemId) -> Result<&str> {
        self.items.get(&id).map(String::as_str).ok_or(Error::Resolution {
            kind: NameKind::Item,
            id,
        })
    }

    pub fn upgrade_name(&self, id: UpgradeId) -> Result<&str> {
        self.upgrades
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::Resolution {
                kind: NameKind::Upgrade,
                id,
            })
    }
}

/// Resolve both id sets through their lookups, concurrently.
///
/// Both lookups are awaited before anything is checked, and every requested
/// id must come back named unless `policy` allows placeholders.
pub async fn resolve_names<I, U>(
    references: &References,
    item_lookup: &I,
    upgrade_lookup: &U,
    policy: MissingNamePolicy,
) -> Result<NameTables>
where
    I: NameLookup,
    U: NameLookup,
{
    let (items, upgrades) = futures::join!(
        fetch(NameKind::Item, &references.items, item_lookup),
        fetch(NameKind::Upgrade, &references.upgrades, upgrade_lookup),
    );

    let items = complete(NameKind::Item, &references.items, items?, policy)?;
    let upgrades = complete(NameKind::Upgrade, &references.upgrades, upgrades?, policy)?;

    Ok(NameTables::new(items, upgrades))
}

async fn fetch<L>(kind: NameKind, ids: &BTreeSet<u32>, lookup: &L) -> Result<HashMap<u32, String>>
where
    L: NameLookup,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    tracing::debug!(%kind, count = ids.len(), "looking up names");
    lookup
        .lookup(ids)
        .await
        .map_err(|source| Error::Transport { kind, source })
}

fn complete(
    kind: NameKind,
    requested: &BTreeSet<u32>,
    mut names: HashMap<u32, String>,
    policy: MissingNamePolicy,
) -> Result<HashMap<u32, String>> {
    for &id in requested {
        if names.contains_key(&id) {
            continue;
        }
        match policy {
            MissingNamePolicy::Fail => return Err(Error::Resolution { kind, id }),
            MissingNamePolicy::Placeholder => {
                tracing::warn!(%kind, id, "no name returned, using placeholder");
                names.insert(id, kind.placeholder(id));
            }
        }
    }
    Ok(names)
}
