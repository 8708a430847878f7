//! Host module system
//!
//! Resolves dotted names to [`ModuleSpec`] handles by searching directories and
//! zip archives, and remembers every module it has resolved. The resource
//! resolver only sees the narrow [`ModuleHost`] trait.

pub mod finder;
pub mod registry;

pub use finder::PathEntry;
pub use registry::ModuleRegistry;

use std::sync::Arc;

use crate::domain::ModuleSpec;
use crate::error::Result;

/// Resolves module names, importing them on first use
pub trait ModuleHost {
    /// Return the module named `name`, resolving and caching it if needed.
    fn import_module(&self, name: &str) -> Result<Arc<ModuleSpec>>;
}
