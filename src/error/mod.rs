//! Error types and handling for pkgdata
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`package`]: Module and package resolution errors
//! - [`path`]: Resource path validation errors
//! - [`resource`]: Data loading errors raised by loaders
//! - [`config`]: Configuration errors

pub mod config;
pub mod package;
pub mod path;
pub mod resource;


use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Why a resource path was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathViolation {
    /// The path is absolute or rooted
    Absolute,
    /// The normalized path still starts with a parent-directory marker
    Traversal,
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathViolation::Absolute => write!(f, "is absolute"),
            PathViolation::Traversal => write!(f, "attempts to traverse past package"),
        }
    }
}

/// Main error type for pkgdata operations
#[derive(Error, Diagnostic, Debug)]
pub enum PkgDataError {
    // Package errors
    #[error("'{name}' is not a package")]
    #[diagnostic(
        code(pkgdata::package::not_a_package),
        help("Resources are anchored to packages; pass the enclosing package instead")
    )]
    NotAPackage { name: String },

    #[error("No module named '{name}'")]
    #[diagnostic(
        code(pkgdata::package::module_not_found),
        help("Check the module name and the configured search paths")
    )]
    ModuleNotFound { name: String },

    #[error("Invalid module name: '{name}'")]
    #[diagnostic(
        code(pkgdata::package::invalid_name),
        help("Module names are dot-separated identifiers such as pkg.sub")
    )]
    InvalidModuleName { name: String },

    #[error("Package '{name}' has no origin to anchor resources")]
    #[diagnostic(code(pkgdata::package::missing_origin))]
    MissingOrigin { name: String },

    // Path errors
    #[error("'{path}' {violation}")]
    #[diagnostic(
        code(pkgdata::path::invalid),
        help("Resource paths are relative to the package directory and may not leave it")
    )]
    InvalidPath {
        path: String,
        violation: PathViolation,
    },

    // Resource errors
    #[error("Resource not found: {location}")]
    #[diagnostic(code(pkgdata::resource::not_found))]
    ResourceNotFound { location: String },

    #[error("Failed to read resource: {location}: {reason}")]
    #[diagnostic(code(pkgdata::resource::read_failed))]
    ResourceReadFailed { location: String, reason: String },

    #[error("Failed to read archive '{archive}': {reason}")]
    #[diagnostic(code(pkgdata::resource::archive_read_failed))]
    ArchiveReadFailed { archive: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(pkgdata::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(pkgdata::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pkgdata::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    #[diagnostic(code(pkgdata::fs::io_error))]
    IoError { message: String },
}

impl PkgDataError {
    /// True for the not-found failure raised by data loaders
    pub fn is_not_found(&self) -> bool {
        matches!(self, PkgDataError::ResourceNotFound { .. })
    }
}

impl From<std::io::Error> for PkgDataError {
    fn from(err: std::io::Error) -> Self {
        PkgDataError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PkgDataError {
    fn from(err: serde_yaml::Error) -> Self {
        PkgDataError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PkgDataError>;
