//! Loader for modules stored inside zip archives
//!
//! A [`ZipIndex`] reads the archive's central directory once and answers
//! existence queries for the finder. [`ZipLoader`] re-opens the archive for
//! every read, so no file handle outlives a call.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;
use zip::ZipArchive;
use zip::result::ZipError;

use super::DataLoader;
use crate::error::{Result, resource};
use crate::path_utils::to_forward_slashes;

/// Entry names of one zip archive
#[derive(Debug)]
pub struct ZipIndex {
    archive: PathBuf,
    names: BTreeSet<String>,
}

impl ZipIndex {
    /// Read the entry table of the archive at `archive`.
    pub fn open(archive: &Path) -> Result<Self> {
        let zip = open_archive(archive)?;
        let names = zip.file_names().map(str::to_string).collect();
        Ok(Self {
            archive: archive.to_path_buf(),
            names,
        })
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// True if `key` names a file entry.
    pub fn contains_file(&self, key: &str) -> bool {
        !key.ends_with('/') && self.names.contains(key)
    }

    /// True if `key` names a directory, explicit or implied by a nested entry.
    pub fn contains_dir(&self, key: &str) -> bool {
        let prefix = format!("{}/", key.trim_end_matches('/'));
        self.names
            .range(prefix.clone()..)
            .next()
            .is_some_and(|name| name.starts_with(&prefix))
    }

    /// Archive entry name for an absolute location under the archive path.
    pub fn entry_key(&self, location: &Path) -> Option<String> {
        let relative = location.strip_prefix(&self.archive).ok()?;
        let key = to_forward_slashes(relative);
        if key.is_empty() { None } else { Some(key) }
    }
}

/// Serves entries of a single zip archive
#[derive(Debug, Clone)]
pub struct ZipLoader {
    index: Arc<ZipIndex>,
}

impl ZipLoader {
    pub fn new(index: Arc<ZipIndex>) -> Self {
        Self { index }
    }

    pub fn archive(&self) -> &Path {
        self.index.archive()
    }
}

impl DataLoader for ZipLoader {
    fn get_data(&self, location: &Path) -> Result<Vec<u8>> {
        let Some(key) = self.index.entry_key(location) else {
            return Err(resource::not_found(location));
        };
        if !self.index.contains_file(&key) {
            return Err(resource::not_found(location));
        }

        trace!(archive = %self.archive().display(), entry = %key, "reading archive entry");
        let mut zip = open_archive(self.archive())?;
        let mut entry = zip.by_name(&key).map_err(|e| match e {
            ZipError::FileNotFound => resource::not_found(location),
            other => resource::archive_read_failed(self.archive(), other),
        })?;

        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| resource::archive_read_failed(self.archive(), e))?;
        Ok(data)
    }
}

fn open_archive(archive: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(archive).map_err(|e| resource::archive_read_failed(archive, e))?;
    ZipArchive::new(BufReader::new(file)).map_err(|e| resource::archive_read_failed(archive, e))
}
