use std::path::{Component, Path, PathBuf};

/// Validates that a relative `target_path` stays _inside_ whatever base it is joined to.
/// Rejects absolute paths and `..` sequences that climb above the base.
pub fn is_path_safe(target_path: &Path) -> bool {
    let mut depth = 0;
    for component in target_path.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            Component::Normal(_) => {
                depth += 1;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}

/// Join an archive-internal path (always `/`-separated) onto `base`.
///
/// Returns `None` when the internal path would land outside `base`.
pub fn join_internal(base: &Path, internal: &str) -> Option<PathBuf> {
    let relative: PathBuf = internal
        .split('/')
        .filter(|part| !part.is_empty())
        .collect();

    if internal.starts_with('/') || !is_path_safe(&relative) {
        return None;
    }

    Some(base.join(relative))
}
