//! Resource resolution
//!
//! A **resource** is a data file stored next to a package's defining source.
//! [`open`] turns a package reference and a relative path into an in-memory
//! byte stream, whether the package lives in a directory or a zip archive:
//!
//! 1. resolve the package reference to a handle and require it to be a package;
//! 2. reject absolute paths and paths that normalize to something starting
//!    with `..`;
//! 3. join the path onto the package's anchor directory and ask the package's
//!    loader for the bytes, passing any loader failure through untouched.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{ModuleName, ModuleSpec};
use crate::error::{Result, package, path};
use crate::host::ModuleHost;
use crate::path_utils::{anchor_directory, normalize_lexically};

/// Seekable in-memory stream over a resource's bytes
pub type BinaryStream = Cursor<Vec<u8>>;

/// A package given by name or as an already-resolved handle
#[derive(Debug, Clone)]
pub enum PackageRef {
    Name(String),
    Module(Arc<ModuleSpec>),
}

impl From<&str> for PackageRef {
    fn from(name: &str) -> Self {
        PackageRef::Name(name.to_string())
    }
}

impl From<String> for PackageRef {
    fn from(name: String) -> Self {
        PackageRef::Name(name)
    }
}

impl From<&ModuleName> for PackageRef {
    fn from(name: &ModuleName) -> Self {
        PackageRef::Name(name.to_dotted())
    }
}

impl From<Arc<ModuleSpec>> for PackageRef {
    fn from(module: Arc<ModuleSpec>) -> Self {
        PackageRef::Module(module)
    }
}

impl From<&Arc<ModuleSpec>> for PackageRef {
    fn from(module: &Arc<ModuleSpec>) -> Self {
        PackageRef::Module(Arc::clone(module))
    }
}

/// Open a resource of `package` for binary reading.
///
/// The returned stream holds a copy of the bytes and is positioned at the start.
pub fn open<H>(host: &H, package: impl Into<PackageRef>, path: impl AsRef<Path>) -> Result<BinaryStream>
where
    H: ModuleHost + ?Sized,
{
    read(host, package, path).map(Cursor::new)
}

/// Read the full contents of a resource of `package`.
///
/// The path is validated before `package` is resolved, so a rejected path
/// never imports anything.
pub fn read<H>(host: &H, package: impl Into<PackageRef>, path: impl AsRef<Path>) -> Result<Vec<u8>>
where
    H: ModuleHost + ?Sized,
{
    let relative = normalize_resource_path(path.as_ref())?;
    let module = resolve_package(host, package.into())?;
    let candidates = candidate_locations(&module, &relative)?;

    let mut last_miss = None;
    for location in candidates {
        debug!(package = %module.name(), location = %location.display(), "opening resource");
        match module.loader().get_data(&location) {
            Ok(data) => return Ok(data),
            Err(e) if e.is_not_found() => last_miss = Some(e),
            Err(e) => return Err(e),
        }
    }

    Err(last_miss.unwrap_or_else(|| package::missing_origin(module.name().to_dotted())))
}

/// Absolute locations a resource would be read from, in lookup order.
///
/// Regular packages yield exactly one location. Namespace packages yield one
/// per portion.
pub fn locations<H>(host: &H, package: impl Into<PackageRef>, path: impl AsRef<Path>) -> Result<Vec<PathBuf>>
where
    H: ModuleHost + ?Sized,
{
    let relative = normalize_resource_path(path.as_ref())?;
    let module = resolve_package(host, package.into())?;
    candidate_locations(&module, &relative)
}

/// Resolve a package reference, importing by name if needed.
pub fn resolve_package<H>(host: &H, package: PackageRef) -> Result<Arc<ModuleSpec>>
where
    H: ModuleHost + ?Sized,
{
    let module = match package {
        PackageRef::Name(name) => host.import_module(&name)?,
        PackageRef::Module(module) => module,
    };

    if !module.is_package() {
        return Err(package::not_a_package(module.name().to_dotted()));
    }
    Ok(module)
}

/// Validate and normalize a resource path relative to its package.
///
/// The traversal check is textual: any normalized path starting with `..`
/// is refused, including names such as `..data`.
pub fn normalize_resource_path(relative: &Path) -> Result<PathBuf> {
    if relative.is_absolute() || relative.has_root() {
        return Err(path::absolute(relative));
    }

    let normalized = normalize_lexically(relative);
    if normalized.to_string_lossy().starts_with("..") {
        return Err(path::traversal(relative));
    }
    Ok(normalized)
}

fn candidate_locations(module: &ModuleSpec, relative: &Path) -> Result<Vec<PathBuf>> {
    let anchors = match module.origin() {
        Some(origin) => vec![anchor_directory(origin)?],
        None => module
            .search_locations()
            .map(<[PathBuf]>::to_vec)
            .unwrap_or_default(),
    };

    if anchors.is_empty() {
        return Err(package::missing_origin(module.name().to_dotted()));
    }
    Ok(anchors.into_iter().map(|anchor| anchor.join(relative)).collect())
}

/// Convenience for callers holding a resolved handle only.
pub fn open_module(module: &Arc<ModuleSpec>, path: impl AsRef<Path>) -> Result<BinaryStream> {
    open(&NoImports, module, path)
}

/// Host that resolves nothing; handles must be passed directly.
struct NoImports;

impl ModuleHost for NoImports {
    fn import_module(&self, name: &str) -> Result<Arc<ModuleSpec>> {
        Err(package::module_not_found(name))
    }
}
