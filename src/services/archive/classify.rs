use crate::services::config::Suffixes;

/// How a top-level source directory entry is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Already loadable; passed through unchanged.
    Direct,
    /// Unpacked into the staging area first.
    Container,
    Ignored,
}

/// Classify a filename by its suffix. Case-sensitive; the direct suffix wins
/// if a name somehow matches both.
pub fn classify(file_name: &str, suffixes: &Suffixes) -> EntryKind {
    if file_name.ends_with(&suffixes.direct) {
        EntryKind::Direct
    } else if file_name.ends_with(&suffixes.container) {
        EntryKind::Container
    } else {
        EntryKind::Ignored
    }
}
