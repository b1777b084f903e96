//! Maps raw entries onto [`FileKind`].
//!
//! Predicates are checked in a fixed order and the first match wins:
//! symbolic link, directory, executable, suffix rules (compressed, then
//! image), and finally regular.

use crate::models::file_entry::{is_hidden_name, PLACEHOLDER_GROUP, PLACEHOLDER_OWNER};
use crate::models::{FileEntry, FileKind};
use crate::services::fs::listing::{EntryMetadata, RawEntry};

/// Leading mode-string character marking a symbolic link (compared case-insensitively).
pub const LINK_INDICATOR: char = 'L';

/// Archive suffixes, matched exactly against the end of the name.
pub const COMPRESSED_SUFFIXES: &[&str] = &[".deb", ".zip", ".gz", ".tar", ".rar"];
pub const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".gif"];

/// Suffix rules in the order they are consulted.
pub const SUFFIX_RULES: &[(FileKind, &[&str])] = &[
    (FileKind::Compressed, COMPRESSED_SUFFIXES),
    (FileKind::Image, IMAGE_SUFFIXES),
];

/// Decides whether an entry is executable on the current host.
pub trait ExecutableProbe: Send + Sync {
    fn is_executable(&self, name: &str, mode: &str) -> bool;
}

/// Executable when the name ends with a fixed extension.
#[derive(Debug, Clone)]
pub struct ExtensionProbe {
    pub extension: &'static str,
}

impl ExecutableProbe for ExtensionProbe {
    fn is_executable(&self, name: &str, _mode: &str) -> bool {
        name.ends_with(self.extension)
    }
}

/// Executable when the mode string carries the permission marker anywhere.
#[derive(Debug, Clone)]
pub struct PermissionProbe {
    pub marker: char,
}

impl ExecutableProbe for PermissionProbe {
    fn is_executable(&self, _name: &str, mode: &str) -> bool {
        mode.contains(self.marker)
    }
}

/// Picks the probe matching the host platform.
pub fn host_probe() -> Box<dyn ExecutableProbe> {
    if cfg!(windows) {
        Box::new(ExtensionProbe { extension: ".exe" })
    } else {
        Box::new(PermissionProbe { marker: 'x' })
    }
}

pub struct Classifier {
    executable: Box<dyn ExecutableProbe>,
    suffix_rules: &'static [(FileKind, &'static [&'static str])],
}

impl Classifier {
    pub fn new(executable: Box<dyn ExecutableProbe>) -> Self {
        Self {
            executable,
            suffix_rules: SUFFIX_RULES,
        }
    }

    pub fn for_host() -> Self {
        Self::new(host_probe())
    }

    /// Classifies an already built entry from its name, directory flag and mode.
    pub fn classify(&self, entry: &FileEntry) -> FileKind {
        self.kind_of(&entry.name, entry.is_dir, &entry.mode)
    }

    pub fn kind_of(&self, name: &str, is_dir: bool, mode: &str) -> FileKind {
        if is_link_mode(mode) {
            return FileKind::SymbolicLink;
        }
        if is_dir {
            return FileKind::Directory;
        }
        if self.executable.is_executable(name, mode) {
            return FileKind::Executable;
        }
        self.suffix_rules
            .iter()
            .find(|(_, suffixes)| suffixes.iter().any(|s| name.ends_with(s)))
            .map(|(kind, _)| *kind)
            .unwrap_or(FileKind::Regular)
    }

    /// Builds a [`FileEntry`] once metadata is known and assigns its kind.
    pub fn build_entry(&self, raw: RawEntry, meta: EntryMetadata) -> FileEntry {
        let kind = self.kind_of(&raw.name, raw.is_dir, &meta.mode);
        tracing::trace!(name = %raw.name, kind = kind.as_str(), "classified");
        FileEntry {
            is_hidden: is_hidden_name(&raw.name),
            name: raw.name,
            kind,
            is_dir: raw.is_dir,
            owner: PLACEHOLDER_OWNER.to_string(),
            group: PLACEHOLDER_GROUP.to_string(),
            size: meta.size,
            modified: meta.modified,
            mode: meta.mode,
        }
    }
}

fn is_link_mode(mode: &str) -> bool {
    mode.chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&LINK_INDICATOR))
}
