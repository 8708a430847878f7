//! Common test utilities for pkgdata integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use pkgdata::{HostConfig, ModuleRegistry};
use tempfile::TempDir;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

pub const UTF8_CONTENT: &[u8] = b"Hello, UTF-8 world!\n";
pub const BINARY_CONTENT: &[u8] = &[0, 1, 2, 3];

/// A temporary site directory holding packages for one test
pub struct TestHost {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the site root
    pub path: PathBuf,
}

impl TestHost {
    /// Create a new empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Lay out a regular package `<dir>/<name>/` with the standard data files
    pub fn create_data_package(&self, dir: &str, name: &str) -> PathBuf {
        let root = if dir.is_empty() {
            name.to_string()
        } else {
            format!("{dir}/{name}")
        };
        self.write_file(&format!("{root}/__init__.py"), b"");
        self.write_namespace_files(&root);
        self.path.join(root)
    }

    /// Lay out the data files without an init file, making a namespace portion
    pub fn create_namespace_portion(&self, dir: &str, name: &str) -> PathBuf {
        let root = if dir.is_empty() {
            name.to_string()
        } else {
            format!("{dir}/{name}")
        };
        self.write_namespace_files(&root);
        self.path.join(root)
    }

    fn write_namespace_files(&self, root: &str) {
        self.write_file(&format!("{root}/utf-8.file"), UTF8_CONTENT);
        self.write_file(&format!("{root}/binary.file"), BINARY_CONTENT);
        self.write_file(&format!("{root}/subdirectory/binary.file"), BINARY_CONTENT);
    }

    /// Zip the site directory `dir` into `archive` (relative to the site root)
    pub fn zip_dir(&self, dir: &str, archive: &str) -> PathBuf {
        let source = self.path.join(dir);
        let archive_path = self.path.join(archive);
        let file = std::fs::File::create(&archive_path).expect("Failed to create archive");
        let mut writer = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in WalkDir::new(&source).sort_by_file_name() {
            let entry = entry.expect("Failed to walk directory");
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry
                .path()
                .strip_prefix(&source)
                .expect("entry under source")
                .to_string_lossy()
                .replace('\\', "/");
            writer.start_file(name, options).expect("Failed to start entry");
            let content = std::fs::read(entry.path()).expect("Failed to read entry");
            writer.write_all(&content).expect("Failed to write entry");
        }

        writer.finish().expect("Failed to finish archive");
        archive_path
    }

    /// Registry searching the given entries, relative to the site root
    pub fn registry(&self, entries: &[&str]) -> ModuleRegistry {
        let config = entries
            .iter()
            .fold(HostConfig::new(), |config, entry| {
                config.with_search_path(self.path.join(entry))
            });
        ModuleRegistry::new(config)
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form of a path, for comparing against resolved locations
pub fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).expect("Failed to canonicalize")
}
