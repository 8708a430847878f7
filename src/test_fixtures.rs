//! Test fixtures for building packages on disk, in zip archives, and in memory.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_data_package, FakeLoader, fake_package};
//!
//! #[test]
//! fn my_test() {
//!     // Package `data` with utf-8.file and subdirectory/binary.file
//!     let temp = create_temp_dir();
//!     create_data_package(&temp, "data");
//!
//!     // In-memory package whose loader serves fixed bytes
//!     let loader = FakeLoader::serving(b"Hello, world!");
//!     let package = fake_package(&loader, true);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::domain::{ModuleName, ModuleSpec};
use crate::error::{Result, resource};
use crate::loader::DataLoader;

/// Contents of `utf-8.file` in the data package fixture
pub const UTF8_CONTENT: &[u8] = b"Hello, UTF-8 world!\n";

/// Contents of `binary.file` in the data package fixture
pub const BINARY_CONTENT: &[u8] = &[0, 1, 2, 3];

/// Files making up the data package fixture, relative to the package directory
pub const DATA_PACKAGE_FILES: &[(&str, &[u8])] = &[
    ("__init__.py", b""),
    ("utf-8.file", UTF8_CONTENT),
    ("binary.file", BINARY_CONTENT),
    ("subdirectory/__init__.py", b""),
    ("subdirectory/binary.file", BINARY_CONTENT),
];

/// Absolute base for temp dirs, so a relative `TMPDIR` never lands them in the repo.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        std::path::absolute(&t).unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples; paths are relative to `temp`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &[u8])]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Create the data package fixture as `<temp>/<name>/`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_data_package(temp: &TempDir, name: &str) -> PathBuf {
    let files: Vec<(String, &[u8])> = DATA_PACKAGE_FILES
        .iter()
        .map(|(path, content)| (format!("{name}/{path}"), *content))
        .collect();
    let borrowed: Vec<(&str, &[u8])> = files.iter().map(|(p, c)| (p.as_str(), *c)).collect();
    create_test_files(temp, &borrowed);
    temp.path().join(name)
}

/// Write a zip archive with the given (entry name, content) pairs.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn create_zip_archive(archive: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(archive).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(*name, options).expect("Failed to start entry");
        writer.write_all(content).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish archive");
}

#[derive(Debug, Clone)]
enum FakeResponse {
    Bytes(Vec<u8>),
    NotFound,
    Fails(String),
}

/// Loader with a canned response that records the last location it was asked for
#[derive(Debug, Clone)]
pub struct FakeLoader {
    response: FakeResponse,
    requested: Arc<Mutex<Option<PathBuf>>>,
}

impl FakeLoader {
    fn with(response: FakeResponse) -> Self {
        Self {
            response,
            requested: Arc::new(Mutex::new(None)),
        }
    }

    pub fn serving(bytes: &[u8]) -> Self {
        Self::with(FakeResponse::Bytes(bytes.to_vec()))
    }

    pub fn not_found() -> Self {
        Self::with(FakeResponse::NotFound)
    }

    pub fn failing(reason: &str) -> Self {
        Self::with(FakeResponse::Fails(reason.to_string()))
    }

    pub fn last_requested(&self) -> Option<PathBuf> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DataLoader for FakeLoader {
    fn get_data(&self, location: &Path) -> Result<Vec<u8>> {
        *self.requested.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(location.to_path_buf());
        match &self.response {
            FakeResponse::Bytes(bytes) => Ok(bytes.clone()),
            FakeResponse::NotFound => Err(resource::not_found(location)),
            FakeResponse::Fails(reason) => Err(resource::read_failed(location, reason)),
        }
    }
}

/// An in-memory `testingpackage` whose origin does not exist on disk.
///
/// With `is_package` false the handle is a leaf module.
#[must_use]
pub fn fake_package(loader: &FakeLoader, is_package: bool) -> Arc<ModuleSpec> {
    let name = ModuleName::parse("testingpackage").expect("valid name");
    let loader: Arc<dyn DataLoader> = Arc::new(loader.clone());
    let spec = if is_package {
        ModuleSpec::package(name, "does-not-exist", Vec::new(), loader)
    } else {
        ModuleSpec::module(name, "does-not-exist", loader)
    };
    Arc::new(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_data_package() {
        let temp = create_temp_dir();
        let root = create_data_package(&temp, "data");
        assert!(root.join("__init__.py").is_file());
        assert_eq!(std::fs::read(root.join("utf-8.file")).expect("read"), UTF8_CONTENT);
        assert!(root.join("subdirectory/binary.file").is_file());
    }

    #[test]
    fn test_create_zip_archive() {
        let temp = create_temp_dir();
        let archive = temp.path().join("fixture.zip");
        create_zip_archive(&archive, &[("pkg/__init__.py", b"")]);
        let index = crate::loader::ZipIndex::open(&archive).expect("index");
        assert!(index.contains_file("pkg/__init__.py"));
    }

    #[test]
    fn test_fake_loader_records_location() {
        let loader = FakeLoader::serving(b"abc");
        assert_eq!(loader.last_requested(), None);
        let data = loader.get_data(Path::new("/pkg/file")).expect("data");
        assert_eq!(data, b"abc");
        assert_eq!(loader.last_requested(), Some(PathBuf::from("/pkg/file")));
    }
}
