//! Loader for namespace packages
//!
//! A namespace package has no defining source of its own; it is the union of
//! portions found on different search entries, each served by its own loader.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::DataLoader;
use crate::error::{Result, resource};

/// Dispatches to the portion whose root contains the location
#[derive(Debug, Clone, Default)]
pub struct NamespaceLoader {
    portions: Vec<(PathBuf, Arc<dyn DataLoader>)>,
}

impl NamespaceLoader {
    pub fn new(portions: Vec<(PathBuf, Arc<dyn DataLoader>)>) -> Self {
        Self { portions }
    }

    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        self.portions.iter().map(|(root, _)| root.as_path())
    }
}

impl DataLoader for NamespaceLoader {
    fn get_data(&self, location: &Path) -> Result<Vec<u8>> {
        self.portions
            .iter()
            .find(|(root, _)| location.starts_with(root))
            .map_or_else(
                || Err(resource::not_found(location)),
                |(_, loader)| loader.get_data(location),
            )
    }
}
