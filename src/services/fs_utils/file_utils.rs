use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Delete a directory tree post-order: every file first, each directory
/// only once all of its children are gone. Symlinks are removed, never followed.
pub fn remove_dir_post_order(dir: &Path) -> io::Result<()> {
    let walker = WalkDir::new(dir).follow_links(false).contents_first(true);

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Remove `dir` if present, then create it again, empty.
pub fn recreate_dir(dir: &Path) -> io::Result<()> {
    if let Ok(meta) = fs::symlink_metadata(dir) {
        log::debug!("Clearing {}", dir.display());
        if meta.is_dir() {
            remove_dir_post_order(dir)?;
        } else {
            fs::remove_file(dir)?;
        }
    }
    fs::create_dir_all(dir)
}
