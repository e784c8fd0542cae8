pub mod entry;
pub mod kind;
pub mod payload;

pub use entry::*;
pub use kind::*;
pub use payload::*;
