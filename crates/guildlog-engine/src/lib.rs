//! Guild log rendering engine.
//!
//! Pipeline: raw JSON records are decoded into typed entries, the item and
//! upgrade ids they mention are collected, both id sets are resolved to names
//! concurrently through injected [`NameLookup`] collaborators, and each entry
//! is rendered into one line of text. Output order matches input order, and
//! any failure aborts the batch before a single line is produced.

pub mod catalog;
pub mod error;
pub mod format;
pub mod message;
pub mod pipeline;
pub mod references;
pub mod resolve;

pub use catalog::NameCatalog;
pub use error::{Error, NameKind, Result};
pub use format::{format_currency, format_list};
pub use message::{format_timestamp, render_entry};
pub use pipeline::{render, render_entries, render_with_policy};
pub use references::{References, extract_references};
pub use resolve::{MissingNamePolicy, NameLookup, NameTables, resolve_names};
