//! Data loading errors

use std::path::Path;

use super::PkgDataError;

/// Creates a resource not found error
pub fn not_found(location: &Path) -> PkgDataError {
    PkgDataError::ResourceNotFound {
        location: location.display().to_string(),
    }
}

/// Creates a resource read failed error
pub fn read_failed(location: &Path, reason: impl ToString) -> PkgDataError {
    PkgDataError::ResourceReadFailed {
        location: location.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an archive read failed error
pub fn archive_read_failed(archive: &Path, reason: impl ToString) -> PkgDataError {
    PkgDataError::ArchiveReadFailed {
        archive: archive.display().to_string(),
        reason: reason.to_string(),
    }
}
