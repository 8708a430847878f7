//! Host configuration
//!
//! Search paths and the on-disk module layout, loaded from a YAML file
//! (`pkgdata.yaml`) and/or the `PKGDATA_PATH` environment variable.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Environment variable holding extra search paths, in platform path-list syntax
pub const SEARCH_PATH_ENV: &str = "PKGDATA_PATH";

/// How modules and packages appear in a search entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleLayout {
    /// Extension of module source files, without the dot
    pub source_extension: String,
    /// File stem that marks a directory as a regular package
    pub package_init: String,
}

impl Default for ModuleLayout {
    fn default() -> Self {
        Self {
            source_extension: "py".to_string(),
            package_init: "__init__".to_string(),
        }
    }
}

impl ModuleLayout {
    /// File name of a leaf module, e.g. `util.py`
    pub fn module_file(&self, stem: &str) -> String {
        format!("{stem}.{}", self.source_extension)
    }

    /// File name of a package's init source, e.g. `__init__.py`
    pub fn init_file(&self) -> String {
        self.module_file(&self.package_init)
    }
}

/// Configuration for a [`ModuleRegistry`](crate::host::ModuleRegistry)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Directories and zip archives searched for top-level modules, in order
    pub search_paths: Vec<PathBuf>,
    pub layout: ModuleLayout,
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file.
    ///
    /// Relative search paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config::not_found(path));
        }

        let content = std::fs::read_to_string(path).map_err(|e| config::read_failed(path, e))?;
        let mut loaded: Self =
            serde_yaml::from_str(&content).map_err(|e| config::parse_failed(path, e))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut loaded.search_paths {
            if entry.is_relative() {
                *entry = base.join(&*entry);
            }
        }
        Ok(loaded)
    }

    /// Search paths from `PKGDATA_PATH`, if set.
    pub fn from_env() -> Self {
        std::env::var_os(SEARCH_PATH_ENV)
            .map(|value| Self::from_path_list(&value))
            .unwrap_or_default()
    }

    /// Search paths from a platform path list (`:`-separated on Unix).
    pub fn from_path_list(list: &OsStr) -> Self {
        Self {
            search_paths: std::env::split_paths(list)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            ..Self::default()
        }
    }

    /// Append the search paths of `other`, keeping this layout.
    pub fn merge(mut self, other: HostConfig) -> Self {
        self.search_paths.extend(other.search_paths);
        self
    }
}
