//! Command implementations for the pkgdata CLI

pub mod cat;
pub mod completions;
pub mod locate;

use std::path::PathBuf;

use pkgdata::error::Result;
use pkgdata::{HostConfig, ModuleRegistry};

/// Build the registry from `--path` flags, `PKGDATA_PATH`, then `--config`, in that order.
pub fn registry(paths: Vec<PathBuf>, config: Option<PathBuf>) -> Result<ModuleRegistry> {
    let from_flags = HostConfig {
        search_paths: paths,
        ..HostConfig::default()
    };
    let mut merged = from_flags.merge(HostConfig::from_env());

    if let Some(path) = config {
        let file = HostConfig::load(&path)?;
        merged.layout = file.layout.clone();
        merged = merged.merge(file);
    }

    Ok(ModuleRegistry::new(merged))
}
