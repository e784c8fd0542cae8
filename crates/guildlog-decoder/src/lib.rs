// Error types
pub mod error;

// Field access over raw records
mod fields;

// Per-kind record parsers
pub mod parser;

pub use error::{DecodeError, Result};
pub use parser::{decode_entries, decode_entry, decode_str};
