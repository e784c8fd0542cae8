use chrono::{DateTime, Utc};
use guildlog_types::LogKind;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

/// Raw field name, plus the camelCase spelling some producers emit
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub name: &'static str,
    alias: Option<&'static str>,
}

impl Field {
    pub const fn new(name: &'static str) -> Self {
        Self { name, alias: None }
    }

    pub const fn aliased(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias: Some(alias),
        }
    }
}

pub(crate) const ID: Field = Field::new("id");
pub(crate) const TIME: Field = Field::new("time");
pub(crate) const TYPE: Field = Field::new("type");
pub(crate) const USER: Field = Field::new("user");
pub(crate) const INVITED_BY: Field = Field::aliased("invited_by", "invitedBy");
pub(crate) const KICKED_BY: Field = Field::aliased("kicked_by", "kickedBy");
pub(crate) const CHANGED_BY: Field = Field::aliased("changed_by", "changedBy");
pub(crate) const OLD_RANK: Field = Field::aliased("old_rank", "oldRank");
pub(crate) const NEW_RANK: Field = Field::aliased("new_rank", "newRank");
pub(crate) const ITEM_ID: Field = Field::aliased("item_id", "itemId");
pub(crate) const COUNT: Field = Field::new("count");
pub(crate) const OPERATION: Field = Field::new("operation");
pub(crate) const COINS: Field = Field::new("coins");
pub(crate) const MOTD: Field = Field::new("motd");
pub(crate) const ACTION: Field = Field::new("action");
pub(crate) const UPGRADE_ID: Field = Field::aliased("upgrade_id", "upgradeId");
pub(crate) const PARTICIPANTS: Field = Field::new("participants");

/// Typed, error-reporting view over one raw log record
pub(crate) struct RecordFields<'a> {
    object: &'a Map<String, Value>,
    id: Option<u64>,
    kind: Option<LogKind>,
}

impl<'a> RecordFields<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        // Best effort: the id is only used to label errors until read for real
        let id = object.get(ID.name).and_then(Value::as_u64);
        Self {
            object,
            id,
            kind: None,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_kind(&mut self, kind: LogKind) {
        self.kind = Some(kind);
    }

    /// Field value; JSON null counts as absent
    fn value(&self, field: Field) -> Option<&'a Value> {
        self.object
            .get(field.name)
            .or_else(|| field.alias.and_then(|alias| self.object.get(alias)))
            .filter(|value| !value.is_null())
    }

    fn missing(&self, field: Field) -> DecodeError {
        DecodeError::MissingField {
            field: field.name,
            kind: self.kind,
            id: self.id,
        }
    }

    fn invalid(&self, field: Field, reason: impl Into<String>) -> DecodeError {
        DecodeError::InvalidField {
            field: field.name,
            id: self.id,
            reason: reason.into(),
        }
    }

    fn required(&self, field: Field) -> Result<&'a Value> {
        self.value(field).ok_or_else(|| self.missing(field))
    }

    pub fn required_str(&self, field: Field) -> Result<&'a str> {
        let value = self.required(field)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(field, format!("expected a string, got {}", value)))
    }

    pub fn optional_str(&self, field: Field) -> Result<Option<&'a str>> {
        match self.value(field) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.invalid(field, format!("expected a string, got {}", value))),
        }
    }

    pub fn required_string(&self, field: Field) -> Result<String> {
        self.required_str(field).map(str::to_string)
    }

    pub fn required_u64(&self, field: Field) -> Result<u64> {
        let value = self.required(field)?;
        value.as_u64().ok_or_else(|| {
            self.invalid(
                field,
                format!("expected a non-negative integer, got {}", value),
            )
        })
    }

    pub fn required_u32(&self, field: Field) -> Result<u32> {
        let wide = self.required_u64(field)?;
        u32::try_from(wide).map_err(|_| self.invalid(field, format!("{} is out of range", wide)))
    }

    pub fn required_timestamp(&self, field: Field) -> Result<DateTime<Utc>> {
        let text = self.required_str(field)?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| {
                self.invalid(
                    field,
                    format!("'{}' is not an RFC 3339 timestamp: {}", text, err),
                )
            })
    }

    pub fn string_list(&self, field: Field) -> Result<Vec<String>> {
        let value = self.required(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.invalid(field, format!("expected an array, got {}", value)))?;

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    self.invalid(field, format!("expected string elements, got {}", item))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_alias_is_accepted() {
        let raw = object(json!({"id": 3, "invitedBy": "Bo"}));
        let fields = RecordFields::new(&raw);
        assert_eq!(fields.required_str(INVITED_BY).unwrap(), "Bo");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let raw = object(json!({"id": 3, "user": null}));
        let mut fields = RecordFields::new(&raw);
        fields.set_kind(LogKind::Joined);

        match fields.required_str(USER) {
            Err(DecodeError::MissingField { field, kind, id }) => {
                assert_eq!(field, "user");
                assert_eq!(kind, Some(LogKind::Joined));
                assert_eq!(id, Some(3));
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
        assert_eq!(fields.optional_str(USER).unwrap(), None);
    }

    #[test]
    fn test_count_out_of_range() {
        let raw = object(json!({"count": 5_000_000_000u64}));
        let fields = RecordFields::new(&raw);
        assert!(matches!(
            fields.required_u32(COUNT),
            Err(DecodeError::InvalidField { field: "count", .. })
        ));
    }

    #[test]
    fn test_negative_number_is_invalid() {
        let raw = object(json!({"coins": -5}));
        let fields = RecordFields::new(&raw);
        assert!(matches!(
            fields.required_u64(COINS),
            Err(DecodeError::InvalidField { field: "coins", .. })
        ));
    }

    #[test]
    fn test_timestamp_with_offset_is_normalized_to_utc() {
        let raw = object(json!({"time": "2024-01-01T02:00:00+02:00"}));
        let fields = RecordFields::new(&raw);
        let time = fields.required_timestamp(TIME).unwrap();
        assert_eq!(time.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
