use guildlog_types::LogKind;
use std::fmt;

/// Result type for guildlog-decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that abort decoding of a log batch
#[derive(Debug)]
pub enum DecodeError {
    /// Discriminator is not one of the known log kinds
    UnknownKind { tag: String, id: Option<u64> },

    /// A field required by the record's kind is absent or null.
    /// `kind` is None when the discriminator itself is missing.
    MissingField {
        field: &'static str,
        kind: Option<LogKind>,
        id: Option<u64>,
    },

    /// A field is present but cannot be interpreted
    InvalidField {
        field: &'static str,
        id: Option<u64>,
        reason: String,
    },

    /// Record is not a JSON object. `index` is its position when it came from a batch.
    NotAnObject { index: Option<usize> },

    /// Document is not valid JSON
    Json(serde_json::Error),
}

struct EntryRef(Option<u64>);

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "entry {}", id),
            None => write!(f, "entry without id"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownKind { tag, id } => {
                write!(f, "unknown log kind '{}' ({})", tag, EntryRef(*id))
            }
            DecodeError::MissingField {
                field,
                kind: Some(kind),
                id,
            } => write!(
                f,
                "missing required field '{}' for {} ({})",
                field,
                kind,
                EntryRef(*id)
            ),
            DecodeError::MissingField {
                field,
                kind: None,
                id,
            } => write!(f, "missing required field '{}' ({})", field, EntryRef(*id)),
            DecodeError::InvalidField { field, id, reason } => {
                write!(f, "invalid field '{}' ({}): {}", field, EntryRef(*id), reason)
            }
            DecodeError::NotAnObject { index: Some(index) } => {
                write!(f, "log record at index {} is not a JSON object", index)
            }
            DecodeError::NotAnObject { index: None } => {
                write!(f, "log record is not a JSON object")
            }
            DecodeError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err)
    }
}
