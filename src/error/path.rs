//! Resource path validation errors

use std::path::Path;

use super::{PathViolation, PkgDataError};

/// Creates an error for an absolute resource path
pub fn absolute(path: &Path) -> PkgDataError {
    PkgDataError::InvalidPath {
        path: path.display().to_string(),
        violation: PathViolation::Absolute,
    }
}

/// Creates an error for a resource path that escapes its package
pub fn traversal(path: &Path) -> PkgDataError {
    PkgDataError::InvalidPath {
        path: path.display().to_string(),
        violation: PathViolation::Traversal,
    }
}
