//! Directory-to-search-set resolution.

mod context;
mod resolve;

pub use context::LoadingContext;
pub use resolve::{to_file_url, DirectoryResolver};

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod resolve_tests;

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod context_tests;
