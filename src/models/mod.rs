pub mod display;
pub mod file_entry;

pub use display::{DisplayStyle, StyleTable};
pub use file_entry::{FileEntry, FileKind};
