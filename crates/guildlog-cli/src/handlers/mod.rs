pub mod check;
pub mod refs;
pub mod render;
