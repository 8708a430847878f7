//! Lexical path utilities
//!
//! Everything here works on the path text only. Resource locations may point
//! inside zip archives, so nothing in this module touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Collapse `.` and `..` components and redundant separators.
///
/// Leading `..` components of a relative path are kept, since there is nothing
/// to cancel them against. `..` directly under a root is dropped. An empty
/// result becomes `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut prefix = PathBuf::new();
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => prefix.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if !path.has_root() {
                    parts.push(component);
                }
            }
            Component::Normal(_) => parts.push(component),
        }
    }

    let mut normalized = prefix;
    for part in parts {
        normalized.push(part.as_os_str());
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Directory containing `origin`, as a normalized absolute path.
///
/// Relative origins are made absolute against the current directory.
pub fn anchor_directory(origin: &Path) -> Result<PathBuf> {
    let absolute = normalize_lexically(&std::path::absolute(origin)?);
    let directory = absolute.parent().map_or_else(|| absolute.clone(), Path::to_path_buf);
    Ok(dunce::simplified(&directory).to_path_buf())
}

/// Convert a path to a forward-slash string, as used for archive entry names.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
