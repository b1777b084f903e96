use time::OffsetDateTime;

/// Owner shown for every entry; real ownership lookup is not performed.
pub const PLACEHOLDER_OWNER: &str = "user";
/// Group shown for every entry.
pub const PLACEHOLDER_GROUP: &str = "group";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub owner: String,
    pub group: String,
    pub size: i64,
    pub modified: OffsetDateTime,
    pub mode: String,
}

impl FileEntry {
    /// Seconds since the epoch; sub-second precision is dropped.
    pub fn modified_secs(&self) -> i64 {
        self.modified.unix_timestamp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    Executable,
    Compressed,
    Image,
    SymbolicLink,
}

impl FileKind {
    pub const ALL: [FileKind; 6] = [
        FileKind::Regular,
        FileKind::Directory,
        FileKind::Executable,
        FileKind::Compressed,
        FileKind::Image,
        FileKind::SymbolicLink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Regular => "regular",
            FileKind::Directory => "directory",
            FileKind::Executable => "executable",
            FileKind::Compressed => "compressed",
            FileKind::Image => "image",
            FileKind::SymbolicLink => "symlink",
        }
    }
}

/// Hidden means a leading dot, nothing else.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
