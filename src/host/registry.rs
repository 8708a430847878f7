//! Module registry
//!
//! Owns the search paths and the map of already-resolved modules. All imports
//! go through one lock, so concurrent first-time imports of the same name
//! resolve it once and share the cached handle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use normpath::PathExt;
use tracing::debug;

use super::ModuleHost;
use super::finder::{self, PathEntry};
use crate::config::{HostConfig, ModuleLayout};
use crate::domain::{ModuleName, ModuleSpec};
use crate::error::{Result, package};
use crate::loader::ZipIndex;
use crate::path_utils::to_forward_slashes;

type ModuleMap = HashMap<ModuleName, Arc<ModuleSpec>>;

/// Resolves and caches modules found on a list of search paths
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    layout: ModuleLayout,
    search_paths: RwLock<Vec<PathBuf>>,
    modules: Mutex<ModuleMap>,
    archives: Mutex<HashMap<PathBuf, Arc<ZipIndex>>>,
}

impl ModuleRegistry {
    pub fn new(config: HostConfig) -> Self {
        Self {
            layout: config.layout,
            search_paths: RwLock::new(config.search_paths),
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &ModuleLayout {
        &self.layout
    }

    pub fn search_paths(&self) -> Vec<PathBuf> {
        self.search_paths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn add_search_path(&self, path: impl Into<PathBuf>) {
        self.search_paths
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.into());
    }

    /// Remove a search path and forget any archive index read for it.
    ///
    /// Modules already resolved from it stay cached until [`remove`](Self::remove)d.
    pub fn remove_search_path(&self, path: &Path) -> bool {
        let mut paths = self
            .search_paths
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = paths.len();
        paths.retain(|p| p != path);
        let removed = paths.len() != before;

        if removed {
            if let Some(archive) = archive_ancestor(path) {
                self.lock_archives().remove(&canonical_archive(&archive));
            }
        }
        removed
    }

    /// True if `name` has already been resolved.
    pub fn is_loaded(&self, name: &str) -> bool {
        ModuleName::parse(name).is_ok_and(|name| self.lock_modules().contains_key(&name))
    }

    /// Cached handle for `name`, without resolving it.
    pub fn get(&self, name: &str) -> Option<Arc<ModuleSpec>> {
        let name = ModuleName::parse(name).ok()?;
        self.lock_modules().get(&name).cloned()
    }

    /// Register a module built by hand, replacing any cached module of that name.
    pub fn insert(&self, spec: ModuleSpec) -> Arc<ModuleSpec> {
        let spec = Arc::new(spec);
        self.lock_modules()
            .insert(spec.name().clone(), Arc::clone(&spec));
        spec
    }

    /// Forget a resolved module so the next import resolves it again.
    pub fn remove(&self, name: &str) -> Option<Arc<ModuleSpec>> {
        let name = ModuleName::parse(name).ok()?;
        self.lock_modules().remove(&name)
    }

    fn import_locked(&self, modules: &mut ModuleMap, name: &ModuleName) -> Result<Arc<ModuleSpec>> {
        if let Some(found) = modules.get(name) {
            return Ok(Arc::clone(found));
        }

        let locations = match name.parent() {
            Some(parent) => {
                let parent_spec = self.import_locked(modules, &parent)?;
                match parent_spec.search_locations() {
                    Some(locations) => locations.to_vec(),
                    None => return Err(package::module_not_found(name.to_dotted())),
                }
            }
            None => self.search_paths(),
        };

        let entries: Vec<PathEntry> = locations
            .iter()
            .filter_map(|location| self.path_entry(location))
            .collect();

        let spec = finder::find_spec(name, &entries, &self.layout)
            .map(Arc::new)
            .ok_or_else(|| package::module_not_found(name.to_dotted()))?;

        debug!(
            module = %name,
            origin = ?spec.origin(),
            package = spec.is_package(),
            "resolved module"
        );
        modules.insert(name.clone(), Arc::clone(&spec));
        Ok(spec)
    }

    /// Classify a search location as a directory or a (sub)path of a zip archive.
    fn path_entry(&self, location: &Path) -> Option<PathEntry> {
        let location = std::path::absolute(location).ok()?;

        if location.is_dir() {
            let dir = location
                .normalize()
                .map_or(location, normpath::BasePathBuf::into_path_buf);
            return Some(PathEntry::Directory(dir));
        }

        let archive = archive_ancestor(&location)?;
        let prefix = location
            .strip_prefix(&archive)
            .map(|rest| to_forward_slashes(rest).trim_matches('/').to_string())
            .ok()?;

        match self.archive_index(&archive) {
            Ok(index) => Some(PathEntry::Archive { index, prefix }),
            Err(e) => {
                debug!(entry = %location.display(), error = %e, "skipping search entry");
                None
            }
        }
    }

    fn archive_index(&self, archive: &Path) -> Result<Arc<ZipIndex>> {
        let canonical = canonical_archive(archive);

        let mut archives = self.lock_archives();
        if let Some(index) = archives.get(&canonical) {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(ZipIndex::open(&canonical)?);
        debug!(archive = %canonical.display(), "indexed archive");
        archives.insert(canonical, Arc::clone(&index));
        Ok(index)
    }

    fn lock_modules(&self) -> MutexGuard<'_, ModuleMap> {
        self.modules.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_archives(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<ZipIndex>>> {
        self.archives.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Nearest existing file among `location` and its ancestors.
fn archive_ancestor(location: &Path) -> Option<PathBuf> {
    let location = std::path::absolute(location).ok()?;
    location
        .ancestors()
        .find(|ancestor| ancestor.is_file())
        .map(Path::to_path_buf)
}

/// Key under which an archive's index is cached.
fn canonical_archive(archive: &Path) -> PathBuf {
    archive
        .normalize()
        .map_or_else(|_| archive.to_path_buf(), normpath::BasePathBuf::into_path_buf)
}

impl ModuleHost for ModuleRegistry {
    fn import_module(&self, name: &str) -> Result<Arc<ModuleSpec>> {
        let name = ModuleName::parse(name)?;
        let mut modules = self.lock_modules();
        self.import_locked(&mut modules, &name)
    }
}
