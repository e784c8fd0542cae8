use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::resolve::NameLookup;

/// In-memory id → name catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCatalog {
    names: BTreeMap<u32, String>,
}

#[derive(Deserialize)]
struct NamedRecord {
    id: u32,
    name: String,
}

impl NameCatalog {
    pub fn new(names: BTreeMap<u32, String>) -> Self {
        Self { names }
    }

    /// Parse `{"19721": "Mithril Ore"}` or the API's
    /// `[{"id": 19721, "name": "Mithril Ore", ...}]`
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let names = if document.is_array() {
            let records: Vec<NamedRecord> = serde_json::from_value(document)?;
            records
                .into_iter()
                .map(|record| (record.id, record.name))
                .collect()
        } else {
            serde_json::from_value(document)?
        };
        Ok(Self { names })
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameLookup for NameCatalog {
    async fn lookup(&self, ids: &BTreeSet<u32>) -> anyhow::Result<HashMap<u32, String>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_document() {
        let catalog = NameCatalog::from_json_str(r#"{"19721": "Mithril Ore", "38": "Guild Vault"}"#)
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(19721), Some("Mithril Ore"));
    }

    #[test]
    fn test_parse_api_records() {
        let catalog = NameCatalog::from_json_str(
            r#"[{"id": 19721, "name": "Mithril Ore", "type": "CraftingMaterial"},
                {"id": 70701, "name": "Guild Ballista Blueprints"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.get(70701), Some("Guild Ballista Blueprints"));
        assert_eq!(catalog.get(1), None);
    }

    #[test]
    fn test_reject_other_shapes() {
        assert!(NameCatalog::from_json_str(r#""Mithril Ore""#).is_err());
        assert!(NameCatalog::from_json_str(r#"[{"id": "x"}]"#).is_err());
    }
}
