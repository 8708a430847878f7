//! Loader for modules backed by plain files on disk

use std::io::ErrorKind;
use std::path::Path;

use tracing::trace;

use super::DataLoader;
use crate::error::{Result, resource};

/// Reads locations straight from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl DataLoader for FileLoader {
    fn get_data(&self, location: &Path) -> Result<Vec<u8>> {
        trace!(location = %location.display(), "reading file");
        std::fs::read(location).map_err(|e| match e.kind() {
            ErrorKind::NotFound => resource::not_found(location),
            _ => resource::read_failed(location, e),
        })
    }
}
