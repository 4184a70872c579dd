use super::context::LoadingContext;
use crate::services::archive::flatten;
use crate::services::collision::{CollisionFilter, LoadedNames};
use crate::services::config::{ResolverConfig, Suffixes};
use crate::services::fs_utils::file_utils::recreate_dir;
use crate::types::errors::{ResolveError, ResolveResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// Builds the module search set for a directory of archives.
///
/// Each call wipes and refills `<source>/<staging_dir_name>`, so two calls
/// against the same source directory must not run at the same time. The
/// resolver does not lock; callers serialize.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    config: ResolverConfig,
    filter: CollisionFilter,
}

impl Default for DirectoryResolver {
    /// Default suffixes, collisions checked against the process-wide name set.
    fn default() -> Self {
        Self::new(ResolverConfig::default(), LoadedNames::process().clone())
    }
}

impl DirectoryResolver {
    pub fn new(config: ResolverConfig, loaded: LoadedNames) -> Self {
        Self {
            config,
            filter: CollisionFilter::new(loaded),
        }
    }

    /// Read the already-loaded names from the variable named in `config`.
    pub fn from_config(config: ResolverConfig) -> Self {
        let loaded = LoadedNames::from_env(&config.search_path_var, &config.direct_suffix);
        Self::new(config, loaded)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn staging_dir(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.config.staging_dir_name)
    }

    /// Steps up to collision filtering: reset staging, enumerate, flatten, filter.
    pub fn resolve_paths(&self, source_dir: &Path) -> ResolveResult<Vec<PathBuf>> {
        let unreadable = |source: io::Error| ResolveError::DirectoryUnreadable {
            path: source_dir.to_path_buf(),
            source,
        };

        // Guard: never create a staging area next to a missing directory
        let meta = fs::metadata(source_dir).map_err(unreadable)?;
        if !meta.is_dir() {
            return Err(unreadable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            )));
        }

        let staging = self.staging_dir(source_dir);
        recreate_dir(&staging).map_err(|source| ResolveError::StagingAreaUnavailable {
            path: staging.clone(),
            source,
        })?;

        let suffixes: Suffixes = self.config.suffixes();
        let mut resolved = Vec::new();
        for entry in fs::read_dir(source_dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path == staging {
                continue;
            }
            resolved.extend(flatten(&path, &staging, &suffixes)?);
        }

        let total = resolved.len();
        resolved.retain(|location| {
            let allowed = self.filter.is_allowed(location);
            if !allowed {
                log::debug!("Already loaded, excluding {}", location.display());
            }
            allowed
        });

        log::info!(
            "Resolved {} location(s) from {} ({} excluded as already loaded)",
            resolved.len(),
            source_dir.display(),
            total - resolved.len()
        );
        Ok(resolved)
    }

    /// The final location sequence, as absolute `file://` URLs.
    pub fn resolve(&self, source_dir: &Path) -> ResolveResult<Vec<Url>> {
        self.resolve_paths(source_dir)?
            .iter()
            .map(|path| to_file_url(path))
            .collect()
    }

    pub fn build_loading_context(
        &self,
        source_dir: &Path,
        parent: Option<Arc<LoadingContext>>,
    ) -> ResolveResult<LoadingContext> {
        let locations = self.resolve(source_dir)?;
        Ok(LoadingContext::new(locations, parent))
    }

    /// Same as [`Self::build_loading_context`] with no fallback scope.
    pub fn build_default_loading_context(&self, source_dir: &Path) -> ResolveResult<LoadingContext> {
        self.build_loading_context(source_dir, None)
    }

    /// Best-effort variant: logs the failure and returns `None`.
    pub fn try_build_loading_context(
        &self,
        source_dir: &Path,
        parent: Option<Arc<LoadingContext>>,
    ) -> Option<LoadingContext> {
        match self.build_loading_context(source_dir, parent) {
            Ok(context) => Some(context),
            Err(e) => {
                log::error!("No loading context for {}: {e}", source_dir.display());
                None
            }
        }
    }
}

/// Convert a resolved path to a `file://` URL, making it absolute first.
pub fn to_file_url(path: &Path) -> ResolveResult<Url> {
    let conversion_failed = || ResolveError::LocationConversion {
        path: path.to_path_buf(),
    };

    let absolute = std::path::absolute(path).map_err(|_| conversion_failed())?;
    Url::from_file_path(&absolute).map_err(|()| conversion_failed())
}
