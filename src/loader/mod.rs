//! Data loaders
//!
//! A [`DataLoader`] returns the raw bytes stored at an absolute location. Each
//! resolved module carries one; the backend decides whether that location is a
//! plain file, an entry inside a zip archive, or one of several namespace
//! portions.

pub mod archive;
pub mod file;
pub mod namespace;

pub use archive::{ZipIndex, ZipLoader};
pub use file::FileLoader;
pub use namespace::NamespaceLoader;

use std::fmt::Debug;
use std::path::Path;

use crate::error::Result;

/// Fetches raw bytes for an absolute location.
///
/// Implementations report a missing location as
/// [`PkgDataError::ResourceNotFound`](crate::error::PkgDataError::ResourceNotFound).
pub trait DataLoader: Debug + Send + Sync {
    fn get_data(&self, location: &Path) -> Result<Vec<u8>>;
}
