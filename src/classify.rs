//! Pure mapping from an entry to its icon and available actions.

use crate::model::DirectoryEntry;

/// Closed set of icon categories shown in the name column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Folder,
    Pdf,
    Word,
    Excel,
    Image,
    Text,
    Generic,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "\u{1f4c1}",
            Self::Pdf => "\u{1f4d5}",
            Self::Word => "\u{1f4d8}",
            Self::Excel => "\u{1f4d7}",
            Self::Image => "\u{1f5bc}",
            Self::Text => "\u{1f4c4}",
            Self::Generic => "\u{1f4c3}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryClass {
    pub icon: IconKind,
    pub can_download: bool,
    pub can_display: bool,
}

/// Classify an entry by its lowercase extension.
///
/// The extension is the text after the final `.`; a dot-less name falls back
/// to the whole name, which never matches a known category. Directories carry
/// no actions at all.
pub fn classify(entry: &DirectoryEntry) -> EntryClass {
    if entry.is_directory {
        return EntryClass {
            icon: IconKind::Folder,
            can_download: false,
            can_display: false,
        };
    }

    let ext = entry
        .name
        .rsplit('.')
        .next()
        .unwrap_or(entry.name.as_str())
        .to_lowercase();

    let icon = match ext.as_str() {
        "pdf" => IconKind::Pdf,
        "doc" | "docx" => IconKind::Word,
        "xls" | "xlsx" => IconKind::Excel,
        "jpg" | "jpeg" | "png" | "gif" => IconKind::Image,
        "txt" => IconKind::Text,
        _ => IconKind::Generic,
    };

    EntryClass {
        icon,
        can_download: true,
        can_display: matches!(ext.as_str(), "jpg" | "jpeg" | "png" | "gif"),
    }
}
