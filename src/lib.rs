//! pkgdata - open data files shipped inside packages
//!
//! Packages are found on a list of search paths (directories or zip archives)
//! by a [`ModuleRegistry`]. [`open`] resolves a package by name or handle,
//! validates a package-relative path, and returns the bytes as an in-memory
//! stream, regardless of where the package is stored.
//!
//! ```no_run
//! use std::io::Read;
//!
//! use pkgdata::{HostConfig, ModuleRegistry, open};
//!
//! let registry = ModuleRegistry::new(HostConfig::new().with_search_path("site-packages"));
//! let mut stream = open(&registry, "data", "utf-8.file")?;
//! let mut text = String::new();
//! stream.read_to_string(&mut text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod loader;
pub mod path_utils;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{HostConfig, ModuleLayout};
pub use domain::{ModuleName, ModuleSpec};
pub use error::{PathViolation, PkgDataError, Result};
pub use host::{ModuleHost, ModuleRegistry};
pub use loader::{DataLoader, FileLoader, NamespaceLoader, ZipLoader};
pub use resource::{BinaryStream, PackageRef, locations, open, open_module, read};
