//! Path-entry finder
//!
//! Looks a module up in an ordered list of search entries. For the last name
//! segment `seg`, each entry is probed for `seg/<init file>` (regular package),
//! then `seg.<ext>` (leaf module), then a bare `seg/` directory, which is kept
//! as a namespace portion while the search continues.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use crate::config::ModuleLayout;
use crate::domain::{ModuleName, ModuleSpec};
use crate::loader::{DataLoader, FileLoader, NamespaceLoader, ZipIndex, ZipLoader};

/// A search entry the finder knows how to probe
#[derive(Debug, Clone)]
pub enum PathEntry {
    /// A directory on disk
    Directory(PathBuf),
    /// A zip archive, optionally narrowed to a directory inside it
    Archive { index: Arc<ZipIndex>, prefix: String },
}

enum Probe {
    Found(ModuleSpec),
    Portion(PathBuf, Arc<dyn DataLoader>),
    Missing,
}

impl PathEntry {
    fn probe(&self, name: &ModuleName, layout: &ModuleLayout) -> Probe {
        match self {
            PathEntry::Directory(dir) => probe_directory(dir, name, layout),
            PathEntry::Archive { index, prefix } => probe_archive(index, prefix, name, layout),
        }
    }
}

/// Find `name` in `entries`, falling back to a namespace package when only
/// bare directories match.
pub fn find_spec(name: &ModuleName, entries: &[PathEntry], layout: &ModuleLayout) -> Option<ModuleSpec> {
    let mut portions: Vec<(PathBuf, Arc<dyn DataLoader>)> = Vec::new();

    for entry in entries {
        match entry.probe(name, layout) {
            Probe::Found(spec) => return Some(spec),
            Probe::Portion(root, loader) => portions.push((root, loader)),
            Probe::Missing => {}
        }
    }

    if portions.is_empty() {
        return None;
    }

    let locations = portions.iter().map(|(root, _)| root.clone()).collect();
    Some(ModuleSpec::namespace(
        name.clone(),
        locations,
        Arc::new(NamespaceLoader::new(portions)),
    ))
}

fn probe_directory(dir: &Path, name: &ModuleName, layout: &ModuleLayout) -> Probe {
    let base = dir.join(name.tail());
    let init = base.join(layout.init_file());
    trace!(entry = %dir.display(), module = %name, "probing directory");

    if init.is_file() {
        return Probe::Found(ModuleSpec::package(
            name.clone(),
            init,
            vec![base],
            Arc::new(FileLoader),
        ));
    }

    let module = dir.join(layout.module_file(name.tail()));
    if module.is_file() {
        return Probe::Found(ModuleSpec::module(name.clone(), module, Arc::new(FileLoader)));
    }

    if base.is_dir() {
        return Probe::Portion(base, Arc::new(FileLoader));
    }

    Probe::Missing
}

fn probe_archive(index: &Arc<ZipIndex>, prefix: &str, name: &ModuleName, layout: &ModuleLayout) -> Probe {
    let key = if prefix.is_empty() {
        name.tail().to_string()
    } else {
        format!("{prefix}/{}", name.tail())
    };
    trace!(archive = %index.archive().display(), key = %key, module = %name, "probing archive");
    let loader = || -> Arc<dyn DataLoader> { Arc::new(ZipLoader::new(Arc::clone(index))) };

    let init_key = format!("{key}/{}", layout.init_file());
    if index.contains_file(&init_key) {
        return Probe::Found(ModuleSpec::package(
            name.clone(),
            archive_location(index, &init_key),
            vec![archive_location(index, &key)],
            loader(),
        ));
    }

    let module_key = layout.module_file(&key);
    if index.contains_file(&module_key) {
        return Probe::Found(ModuleSpec::module(
            name.clone(),
            archive_location(index, &module_key),
            loader(),
        ));
    }

    if index.contains_dir(&key) {
        return Probe::Portion(archive_location(index, &key), loader());
    }

    Probe::Missing
}

/// Absolute location of an archive entry, e.g. `/site/bundle.zip/pkg/__init__.py`
fn archive_location(index: &ZipIndex, key: &str) -> PathBuf {
    key.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(index.archive().to_path_buf(), |acc, segment| acc.join(segment))
}
