use std::io::Write;

use crate::config::{ListOptions, MetadataPolicy};
use crate::core::errors::Result;
use crate::models::FileEntry;
use crate::services::classify::Classifier;
use crate::services::filter::EntryFilter;
use crate::services::fs::listing::DirectorySource;
use crate::services::render::Renderer;
use crate::services::sort::sort_entries;

/// Reads, filters, classifies and sorts the entries of `options.path`.
pub fn collect_entries(
    source: &dyn DirectorySource,
    classifier: &Classifier,
    options: &ListOptions,
) -> Result<Vec<FileEntry>> {
    // A bad pattern must fail before anything is read.
    let filter = EntryFilter::new(options.include_all, options.pattern.as_deref())?;

    let raw = source.read_entries(&options.path)?;
    let mut entries = Vec::with_capacity(raw.len());
    for item in raw {
        if !filter.should_include(&item.name) {
            continue;
        }
        let meta = match source.metadata(&item) {
            Ok(meta) => meta,
            Err(err) if options.on_metadata_error == MetadataPolicy::Skip => {
                tracing::warn!("skipping entry: {}", err);
                continue;
            }
            Err(err) => return Err(err),
        };
        entries.push(classifier.build_entry(item, meta));
    }
    tracing::debug!(kept = entries.len(), "filtered entries");

    sort_entries(&mut entries, options.sort, options.reverse);
    Ok(entries)
}

/// First `limit` entries; zero or an oversize limit keeps them all.
pub fn cap(entries: &[FileEntry], limit: usize) -> &[FileEntry] {
    if limit == 0 || limit > entries.len() {
        entries
    } else {
        &entries[..limit]
    }
}

/// Runs the whole listing and writes it to `out`. Returns the number of lines written.
///
/// Nothing is written unless every stage before rendering succeeded.
pub fn run<W: Write>(
    source: &dyn DirectorySource,
    classifier: &Classifier,
    renderer: &Renderer<'_>,
    options: &ListOptions,
    out: &mut W,
) -> Result<usize> {
    let entries = collect_entries(source, classifier, options)?;
    let shown = cap(&entries, options.limit);
    renderer.render(shown, options.limit, out)?;
    Ok(shown.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Error;
    use crate::services::classify::PermissionProbe;
    use crate::services::fs::listing::{EntryMetadata, RawEntry};
    use crate::services::sort::SortKey;
    use std::path::{Path, PathBuf};
    use time::OffsetDateTime;

    /// In-memory directory: (name, is_dir, size, mtime secs, mode). A `None` size
    /// makes metadata lookup fail for that entry.
    struct MemoryDirectory {
        items: Vec<(&'static str, bool, Option<i64>, i64, &'static str)>,
    }

    impl DirectorySource for MemoryDirectory {
        fn read_entries(&self, _path: &Path) -> Result<Vec<RawEntry>> {
            Ok(self
                .items
                .iter()
                .map(|(name, is_dir, ..)| RawEntry {
                    name: name.to_string(),
                    path: PathBuf::from(name),
                    is_dir: *is_dir,
                })
                .collect())
        }

        fn metadata(&self, entry: &RawEntry) -> Result<EntryMetadata> {
            let (_, _, size, secs, mode) = self
                .items
                .iter()
                .find(|(name, ..)| *name == entry.name)
                .copied()
                .ok_or_else(|| Error::MetadataRetrieval {
                    name: entry.name.clone(),
                    source: std::io::ErrorKind::NotFound.into(),
                })?;
            let size = size.ok_or_else(|| Error::MetadataRetrieval {
                name: entry.name.clone(),
                source: std::io::ErrorKind::PermissionDenied.into(),
            })?;
            Ok(EntryMetadata {
                size,
                modified: OffsetDateTime::from_unix_timestamp(secs).unwrap(),
                mode: mode.to_string(),
            })
        }
    }

    fn sample() -> MemoryDirectory {
        MemoryDirectory {
            items: vec![
                ("a.txt", false, Some(10), 100, "-rw-r--r--"),
                ("B.TAR", false, Some(5), 200, "-rw-r--r--"),
                (".secret", false, Some(1), 50, "-rw-------"),
            ],
        }
    }

    fn classifier() -> Classifier {
        Classifier::new(Box::new(PermissionProbe { marker: 'x' }))
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn default_listing_hides_dotfiles_and_sorts_by_name() {
        let entries = collect_entries(&sample(), &classifier(), &ListOptions::default()).unwrap();
        assert_eq!(names(&entries), ["a.txt", "B.TAR"]);
    }

    #[test]
    fn include_all_shows_dotfiles() {
        let opts = ListOptions {
            include_all: true,
            ..ListOptions::default()
        };
        let entries = collect_entries(&sample(), &classifier(), &opts).unwrap();
        assert_eq!(names(&entries), [".secret", "a.txt", "B.TAR"]);
    }

    #[test]
    fn size_and_time_sorts() {
        let by_size = ListOptions {
            sort: SortKey::Size,
            ..ListOptions::default()
        };
        let entries = collect_entries(&sample(), &classifier(), &by_size).unwrap();
        assert_eq!(names(&entries), ["B.TAR", "a.txt"]);

        let by_time_rev = ListOptions {
            sort: SortKey::Modified,
            reverse: true,
            ..ListOptions::default()
        };
        let entries = collect_entries(&sample(), &classifier(), &by_time_rev).unwrap();
        assert_eq!(names(&entries), ["B.TAR", "a.txt"]);
    }

    #[test]
    fn cap_clamps_but_never_pads() {
        let opts = ListOptions {
            include_all: true,
            ..ListOptions::default()
        };
        let entries = collect_entries(&sample(), &classifier(), &opts).unwrap();
        assert_eq!(cap(&entries, 0).len(), 3);
        assert_eq!(cap(&entries, 10).len(), 3);
        assert_eq!(names(cap(&entries, 2)), [".secret", "a.txt"]);
    }

    #[test]
    fn metadata_failure_aborts_by_default() {
        let dir = MemoryDirectory {
            items: vec![
                ("ok.txt", false, Some(1), 0, "-rw-r--r--"),
                ("locked", false, None, 0, "-rw-r--r--"),
            ],
        };
        let err = collect_entries(&dir, &classifier(), &ListOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MetadataRetrieval { ref name, .. } if name == "locked"));

        let opts = ListOptions {
            on_metadata_error: MetadataPolicy::Skip,
            ..ListOptions::default()
        };
        let entries = collect_entries(&dir, &classifier(), &opts).unwrap();
        assert_eq!(names(&entries), ["ok.txt"]);
    }

    #[test]
    fn filtered_entries_never_hit_metadata() {
        let dir = MemoryDirectory {
            items: vec![
                ("keep.png", false, Some(1), 0, "-rw-r--r--"),
                ("broken", false, None, 0, "-rw-r--r--"),
            ],
        };
        let opts = ListOptions {
            pattern: Some("PNG".to_string()),
            ..ListOptions::default()
        };
        let entries = collect_entries(&dir, &classifier(), &opts).unwrap();
        assert_eq!(names(&entries), ["keep.png"]);
    }

    #[test]
    fn invalid_pattern_writes_nothing() {
        let styles = crate::models::StyleTable::standard();
        let renderer = Renderer::new(&styles, time::UtcOffset::UTC);
        let opts = ListOptions {
            pattern: Some("[unclosed".to_string()),
            ..ListOptions::default()
        };
        let mut out = Vec::new();
        let err = run(&sample(), &classifier(), &renderer, &opts, &mut out).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
        assert!(out.is_empty());
    }
}
