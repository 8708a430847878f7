//! Module and package resolution errors

use super::PkgDataError;

/// Creates a not-a-package error
pub fn not_a_package(name: impl Into<String>) -> PkgDataError {
    PkgDataError::NotAPackage { name: name.into() }
}

/// Creates a module not found error
pub fn module_not_found(name: impl Into<String>) -> PkgDataError {
    PkgDataError::ModuleNotFound { name: name.into() }
}

/// Creates an invalid module name error
pub fn invalid_name(name: impl Into<String>) -> PkgDataError {
    PkgDataError::InvalidModuleName { name: name.into() }
}

/// Creates a missing origin error
pub fn missing_origin(name: impl Into<String>) -> PkgDataError {
    PkgDataError::MissingOrigin { name: name.into() }
}
