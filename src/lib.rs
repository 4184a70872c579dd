//! Resolve a directory of archives into an isolated module search set.
//!
//! Direct archives are taken as-is, container archives are unpacked into a
//! staging subdirectory, and anything whose filename is already on the
//! process's search path is dropped. See [`DirectoryResolver`].

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::collision::{CollisionFilter, LoadedNames};
pub use services::config::ResolverConfig;
pub use services::resolver::{DirectoryResolver, LoadingContext};
pub use types::errors::{ErrorKind, ResolveError, ResolveResult};
