use guildlog_decoder::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for guildlog-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which name table an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Item,
    Upgrade,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Item => "item",
            NameKind::Upgrade => "upgrade",
        }
    }

    /// Stand-in name used when unresolved ids are tolerated
    pub fn placeholder(&self, id: u32) -> String {
        format!("{}_id({})", self.as_str(), id)
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a rendering run
#[derive(Debug)]
pub enum Error {
    /// Raw batch could not be decoded
    Decode(DecodeError),

    /// A referenced id has no name
    Resolution { kind: NameKind, id: u32 },

    /// The name lookup collaborator failed; its error is kept as-is
    Transport {
        kind: NameKind,
        source: anyhow::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::Resolution { kind, id } => {
                write!(f, "Resolution error: no name found for {} {}", kind, id)
            }
            Error::Transport { kind, source } => {
                write!(f, "Transport error: {} lookup failed: {}", kind, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // Display already carries the inner message; expose only its causes
            Error::Decode(err) => std::error::Error::source(err),
            Error::Transport { source, .. } => std::error::Error::source(&**source),
            Error::Resolution { .. } => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names() {
        assert_eq!(NameKind::Item.placeholder(19721), "item_id(19721)");
        assert_eq!(NameKind::Upgrade.placeholder(38), "upgrade_id(38)");
    }

    #[test]
    fn test_resolution_display() {
        let err = Error::Resolution {
            kind: NameKind::Item,
            id: 19721,
        };
        assert_eq!(
            err.to_string(),
            "Resolution error: no name found for item 19721"
        );
    }

    #[test]
    fn test_decode_report_mentions_cause_once() {
        let err = Error::from(DecodeError::UnknownKind {
            tag: "unknown_kind".to_string(),
            id: Some(2),
        });
        let report = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(report, "Decode error: unknown log kind 'unknown_kind' (entry 2)");
    }

    #[test]
    fn test_transport_report_keeps_cause_chain() {
        let cause = anyhow::anyhow!("connection reset by peer").context("GET /v2/items");
        let err = Error::Transport {
            kind: NameKind::Item,
            source: cause,
        };
        let report = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            report,
            "Transport error: item lookup failed: GET /v2/items: connection reset by peer"
        );
    }
}
