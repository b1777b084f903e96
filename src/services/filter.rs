use regex::{Regex, RegexBuilder};

use crate::core::errors::Result;
use crate::models::file_entry::is_hidden_name;

/// Decides which directory entries make it into the working set.
///
/// Both rules must pass: the hidden rule (leading dot, unless `include_all`)
/// and, when a pattern is configured, a case-insensitive regex search over
/// the raw name.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    include_all: bool,
    pattern: Option<Regex>,
}

impl EntryFilter {
    /// Compiles the pattern up front so a malformed one fails before any entry is examined.
    pub fn new(include_all: bool, pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern.filter(|p| !p.is_empty()) {
            Some(p) => Some(RegexBuilder::new(p).case_insensitive(true).build()?),
            None => None,
        };
        Ok(Self {
            include_all,
            pattern,
        })
    }

    pub fn should_include(&self, name: &str) -> bool {
        if is_hidden_name(name) && !self.include_all {
            return false;
        }
        match &self.pattern {
            Some(re) => re.is_match(name),
            None => true,
        }
    }
}
