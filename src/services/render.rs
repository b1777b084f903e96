use std::io::{self, Write};

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::core::errors::Result;
use crate::models::{FileEntry, StyleTable};

/// Minimum width of the right-aligned size column.
pub const SIZE_WIDTH: usize = 8;

/// Formats entries as fixed-column report lines.
pub struct Renderer<'a> {
    styles: &'a StyleTable,
    offset: UtcOffset,
}

impl<'a> Renderer<'a> {
    pub fn new(styles: &'a StyleTable, offset: UtcOffset) -> Self {
        Self { styles, offset }
    }

    /// Uses the host's local offset, or UTC when it cannot be determined.
    pub fn local(styles: &'a StyleTable) -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            tracing::debug!("local offset unavailable, using UTC: {}", err);
            UtcOffset::UTC
        });
        Self::new(styles, offset)
    }

    /// Formats one line: mode, owner, group, size, time, icon, name and kind symbol.
    pub fn format(&self, entry: &FileEntry) -> String {
        let style = self.styles.style(entry.kind);
        let when = stamp(entry.modified.to_offset(self.offset));

        format!(
            "{} {} {} {:>width$} {} {} {}{}",
            entry.mode,
            entry.owner,
            entry.group,
            entry.size,
            when,
            style.icon,
            entry.name,
            style.symbol,
            width = SIZE_WIDTH,
        )
    }

    /// Writes `entries` (already capped to `limit`) one line each.
    ///
    /// A reader that hangs up early (`edls | head`) ends the output quietly.
    pub fn render<W: Write>(&self, entries: &[FileEntry], limit: usize, out: &mut W) -> Result<()> {
        debug_assert!(limit == 0 || entries.len() <= limit);
        match self.write_lines(entries, out) {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("output closed early: {}", err);
                Ok(())
            }
            other => Ok(other?),
        }
    }

    fn write_lines<W: Write>(&self, entries: &[FileEntry], out: &mut W) -> io::Result<()> {
        for entry in entries {
            writeln!(out, "{}", self.format(entry))?;
        }
        out.flush()
    }
}

/// `Jan _2 15:04:05` style stamp.
fn stamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[month repr:short] [day padding:space] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| "-".to_string())
}
