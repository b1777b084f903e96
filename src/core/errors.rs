use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read metadata for '{name}': {source}")]
    MetadataRetrieval {
        name: String,
        source: std::io::Error,
    },
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
