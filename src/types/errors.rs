use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`ResolveError`], for callers that branch on
/// the failure without matching every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryUnreadable,
    StagingAreaUnavailable,
    ArchiveUnpack,
    LocationConversion,
}

/// Why a container archive could not be materialized.
#[derive(Debug, Error)]
pub enum UnpackFailure {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid or corrupt ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Entry escapes the staging area: {0}")]
    UnsafeEntry(String),
    #[error("Entry is both a file and a directory: {0}")]
    NameClash(String),
}

/// Every way a directory resolution can fail. All variants abort the whole
/// resolution; none of them leave a partial result behind.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Cannot read source directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot prepare staging area {}: {source}", .path.display())]
    StagingAreaUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to unpack archive {}: {source}", .path.display())]
    ArchiveUnpack {
        path: PathBuf,
        #[source]
        source: UnpackFailure,
    },
    #[error("Cannot convert {} to a file URL", .path.display())]
    LocationConversion { path: PathBuf },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::DirectoryUnreadable { .. } => ErrorKind::DirectoryUnreadable,
            ResolveError::StagingAreaUnavailable { .. } => ErrorKind::StagingAreaUnavailable,
            ResolveError::ArchiveUnpack { .. } => ErrorKind::ArchiveUnpack,
            ResolveError::LocationConversion { .. } => ErrorKind::LocationConversion,
        }
    }

    /// The entry the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            ResolveError::DirectoryUnreadable { path, .. }
            | ResolveError::StagingAreaUnavailable { path, .. }
            | ResolveError::ArchiveUnpack { path, .. }
            | ResolveError::LocationConversion { path } => path,
        }
    }

    pub(crate) fn unpack(path: &Path, source: impl Into<UnpackFailure>) -> Self {
        ResolveError::ArchiveUnpack {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
