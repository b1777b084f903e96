use std::cmp::Ordering;

use crate::models::FileEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Modified,
}

impl SortKey {
    /// Time wins over size when both are requested; name is the fallback.
    pub fn select(by_time: bool, by_size: bool) -> SortKey {
        if by_time {
            SortKey::Modified
        } else if by_size {
            SortKey::Size
        } else {
            SortKey::Name
        }
    }

    fn compare(&self, a: &FileEntry, b: &FileEntry) -> Ordering {
        match self {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Size => a.size.cmp(&b.size),
            SortKey::Modified => a.modified_secs().cmp(&b.modified_secs()),
        }
    }
}

/// Stable sort by `key`; `reverse` flips the comparison, ties keep their order.
pub fn sort_entries(entries: &mut [FileEntry], key: SortKey, reverse: bool) {
    tracing::debug!(?key, reverse, count = entries.len(), "sorting entries");
    entries.sort_by(|a, b| {
        let order = key.compare(a, b);
        if reverse {
            order.reverse()
        } else {
            order
        }
    });
}
