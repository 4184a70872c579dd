//! Archive flattening: direct archives pass through, zip containers are
//! unpacked into the staging area, everything else is skipped.

mod classify;
mod flatten;
mod tree;

// Re-export public API
pub use classify::{classify, EntryKind};
pub use flatten::{flatten, unpack_container};
pub use tree::{ArchiveTree, Visit};

#[cfg(test)]
#[path = "tests/flatten_tests.rs"]
mod flatten_tests;

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tree_tests;
