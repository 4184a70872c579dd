//! Rejects locations whose filename is already on the process's search path.

use crate::services::config::ResolverConfig;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::OnceLock;

/// Filenames of archives already active in the running process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedNames {
    names: HashSet<String>,
}

impl LoadedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a platform search-path string (`:`- or `;`-separated), keeping
    /// the final component of every entry that ends with `direct_suffix`.
    pub fn from_search_path(value: impl AsRef<OsStr>, direct_suffix: &str) -> Self {
        let names = std::env::split_paths(value.as_ref())
            .filter_map(|entry| {
                let entry = entry.to_string_lossy().into_owned();
                if !entry.ends_with(direct_suffix) {
                    return None;
                }
                Path::new(&entry)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .collect();
        Self { names }
    }

    /// Read the search path from `var`; unset means nothing is loaded yet.
    pub fn from_env(var: &str, direct_suffix: &str) -> Self {
        match std::env::var_os(var) {
            Some(value) => Self::from_search_path(value, direct_suffix),
            None => {
                log::debug!("{var} is not set, no archives considered loaded");
                Self::default()
            }
        }
    }

    /// Process-wide set, built once from the default configuration.
    pub fn process() -> &'static LoadedNames {
        static PROCESS: OnceLock<LoadedNames> = OnceLock::new();
        PROCESS.get_or_init(|| {
            let config = ResolverConfig::default();
            Self::from_env(&config.search_path_var, &config.direct_suffix)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Pure predicate over a location's filename.
#[derive(Debug, Clone, Default)]
pub struct CollisionFilter {
    loaded: LoadedNames,
}

impl CollisionFilter {
    pub fn new(loaded: LoadedNames) -> Self {
        Self { loaded }
    }

    /// `false` iff the filename exactly matches an already-loaded name.
    pub fn is_allowed(&self, location: &Path) -> bool {
        match location.file_name() {
            Some(name) => !self.loaded.contains(&name.to_string_lossy()),
            None => true,
        }
    }

    pub fn loaded(&self) -> &LoadedNames {
        &self.loaded
    }
}

#[cfg(test)]
#[path = "tests/collision_tests.rs"]
mod tests;
