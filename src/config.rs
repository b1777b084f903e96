use std::path::PathBuf;

use clap::Parser;

use crate::services::sort::SortKey;

/// What to do when one entry's metadata cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataPolicy {
    /// Stop the whole listing with an error.
    #[default]
    Abort,
    /// Log a warning and leave the entry out.
    Skip,
}

/// List directory entries with filtering, sorting and type decoration.
#[derive(Debug, Parser)]
#[command(name = "edls", version, about)]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only show names matching this case-insensitive regular expression
    #[arg(short = 'p', value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Include hidden entries (names starting with '.')
    #[arg(short = 'a')]
    pub all: bool,

    /// Show at most N entries; 0 shows everything
    #[arg(short = 'n', value_name = "N", default_value_t = 0)]
    pub limit: usize,

    /// Sort by modification time, oldest first (wins over -s)
    #[arg(short = 't')]
    pub by_time: bool,

    /// Sort by size, smallest first
    #[arg(short = 's')]
    pub by_size: bool,

    /// Reverse the sort order
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Skip entries whose metadata cannot be read instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,
}

/// Resolved settings for one listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub path: PathBuf,
    pub pattern: Option<String>,
    pub include_all: bool,
    pub limit: usize,
    pub sort: SortKey,
    pub reverse: bool,
    pub on_metadata_error: MetadataPolicy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            pattern: None,
            include_all: false,
            limit: 0,
            sort: SortKey::Name,
            reverse: false,
            on_metadata_error: MetadataPolicy::Abort,
        }
    }
}

impl From<Cli> for ListOptions {
    fn from(cli: Cli) -> Self {
        Self {
            sort: SortKey::select(cli.by_time, cli.by_size),
            path: cli.path,
            pattern: cli.pattern.filter(|p| !p.is_empty()),
            include_all: cli.all,
            limit: cli.limit,
            reverse: cli.reverse,
            on_metadata_error: if cli.skip_unreadable {
                MetadataPolicy::Skip
            } else {
                MetadataPolicy::Abort
            },
        }
    }
}
