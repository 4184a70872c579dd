use super::classify::{classify, EntryKind};
use super::tree::{ArchiveTree, Visit};
use crate::services::config::Suffixes;
use crate::services::fs_utils::path_utils::join_internal;
use crate::types::errors::{ResolveError, ResolveResult, UnpackFailure};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Turn one source directory entry into zero or more loadable locations.
///
/// - direct archive: the entry itself
/// - container archive: every file newly unpacked into `staging`
/// - anything else: nothing
///
/// A container failure is reported against `entry` and must abort the
/// caller's resolution, since the staging area is left half-written.
pub fn flatten(entry: &Path, staging: &Path, suffixes: &Suffixes) -> ResolveResult<Vec<PathBuf>> {
    let Some(file_name) = entry.file_name() else {
        return Ok(Vec::new());
    };
    let file_name = file_name.to_string_lossy();

    match classify(&file_name, suffixes) {
        EntryKind::Direct => Ok(vec![entry.to_path_buf()]),
        EntryKind::Container => {
            let staged =
                unpack_container(entry, staging).map_err(|e| ResolveError::unpack(entry, e))?;
            log::debug!("Unpacked {} file(s) from {}", staged.len(), entry.display());
            Ok(staged)
        }
        EntryKind::Ignored => {
            log::debug!("Ignoring {}", entry.display());
            Ok(Vec::new())
        }
    }
}

/// Copy every file of a zip container into `staging`, mirroring its layout.
///
/// A destination that already exists is left untouched and not reported
/// (first writer wins), so two containers sharing an internal path yield
/// one location.
pub fn unpack_container(archive_path: &Path, staging: &Path) -> Result<Vec<PathBuf>, UnpackFailure> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let tree = ArchiveTree::from_entries(
        (0..archive.len()).filter_map(|i| archive.name_for_index(i).map(|name| (i, name))),
    )?;

    let mut staged = Vec::with_capacity(tree.file_count());
    tree.walk(|visit| -> Result<(), UnpackFailure> {
        match visit {
            Visit::Dir(path) => {
                let dir = staged_path(staging, path)?;
                if !dir.is_dir() {
                    fs::create_dir(&dir)?;
                }
            }
            Visit::File { path, index } => {
                let dest = staged_path(staging, path)?;
                if copy_if_absent(&mut archive, index, &dest)? {
                    staged.push(dest);
                } else {
                    log::debug!("Already staged, skipping {}", dest.display());
                }
            }
        }
        Ok(())
    })?;

    Ok(staged)
}

fn staged_path(staging: &Path, internal: &str) -> Result<PathBuf, UnpackFailure> {
    join_internal(staging, internal).ok_or_else(|| UnpackFailure::UnsafeEntry(internal.to_string()))
}

/// Returns `false` when `dest` already exists.
fn copy_if_absent(
    archive: &mut zip::ZipArchive<fs::File>,
    index: usize,
    dest: &Path,
) -> Result<bool, UnpackFailure> {
    let mut outfile = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
    {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    let mut entry = archive.by_index(index)?;
    io::copy(&mut entry, &mut outfile)?;
    Ok(true)
}
