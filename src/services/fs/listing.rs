use crate::core::errors::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use super::mode::mode_string;

/// One item yielded by enumerating a directory, before any metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub size: i64,
    pub modified: OffsetDateTime,
    pub mode: String,
}

/// Supplies directory entries and their metadata to the listing pipeline.
pub trait DirectorySource {
    fn read_entries(&self, path: &Path) -> Result<Vec<RawEntry>>;
    fn metadata(&self, entry: &RawEntry) -> Result<EntryMetadata>;
}

/// [`DirectorySource`] backed by the host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDirectory;

impl DirectorySource for OsDirectory {
    fn read_entries(&self, path: &Path) -> Result<Vec<RawEntry>> {
        let read_err = |source| Error::DirectoryRead {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            // file_type() does not follow links, so a link to a directory is not a directory.
            let is_dir = entry.file_type().map(|t| t.is_dir()).map_err(read_err)?;
            entries.push(RawEntry {
                name: os_str_to_string(entry.file_name()),
                path: entry.path(),
                is_dir,
            });
        }
        tracing::debug!(path = %path.display(), count = entries.len(), "read directory");
        Ok(entries)
    }

    fn metadata(&self, entry: &RawEntry) -> Result<EntryMetadata> {
        let meta_err = |source| Error::MetadataRetrieval {
            name: entry.name.clone(),
            source,
        };

        let md = fs::symlink_metadata(&entry.path).map_err(meta_err)?;
        let modified = md.modified().map_err(meta_err)?;

        Ok(EntryMetadata {
            size: i64::try_from(md.len()).unwrap_or(i64::MAX),
            modified: OffsetDateTime::from(modified),
            mode: mode_string(&md),
        })
    }
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
