use super::file_entry::FileKind;

/// Icon and trailing symbol printed around an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    pub icon: &'static str,
    pub symbol: &'static str,
}

/// Read-only mapping from every [`FileKind`] to its [`DisplayStyle`].
#[derive(Debug, Clone)]
pub struct StyleTable {
    regular: DisplayStyle,
    directory: DisplayStyle,
    executable: DisplayStyle,
    compressed: DisplayStyle,
    image: DisplayStyle,
    symbolic_link: DisplayStyle,
}

impl StyleTable {
    pub const fn standard() -> Self {
        Self {
            regular: DisplayStyle { icon: "📄", symbol: "" },
            directory: DisplayStyle { icon: "📁", symbol: "/" },
            executable: DisplayStyle { icon: "🚀", symbol: "*" },
            compressed: DisplayStyle { icon: "📦", symbol: "" },
            image: DisplayStyle { icon: "🖼", symbol: "" },
            symbolic_link: DisplayStyle { icon: "🔗", symbol: "@" },
        }
    }

    pub fn style(&self, kind: FileKind) -> &DisplayStyle {
        match kind {
            FileKind::Regular => &self.regular,
            FileKind::Directory => &self.directory,
            FileKind::Executable => &self.executable,
            FileKind::Compressed => &self.compressed,
            FileKind::Image => &self.image,
            FileKind::SymbolicLink => &self.symbolic_link,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::standard()
    }
}
