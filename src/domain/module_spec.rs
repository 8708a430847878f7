//! Resolved module handles
//!
//! A [`ModuleSpec`] is what the host hands back after resolving a module name:
//! where the module's defining source lives, whether it can contain submodules,
//! and which [`DataLoader`] serves bytes for it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ModuleName;
use crate::loader::DataLoader;

/// A resolved module or package
#[derive(Clone)]
pub struct ModuleSpec {
    name: ModuleName,
    origin: Option<PathBuf>,
    submodule_search_locations: Option<Vec<PathBuf>>,
    loader: Arc<dyn DataLoader>,
}

impl ModuleSpec {
    /// A leaf module: has an origin but cannot contain submodules.
    pub fn module(name: ModuleName, origin: impl Into<PathBuf>, loader: Arc<dyn DataLoader>) -> Self {
        Self {
            name,
            origin: Some(origin.into()),
            submodule_search_locations: None,
            loader,
        }
    }

    /// A regular package defined by an init source file.
    pub fn package(
        name: ModuleName,
        origin: impl Into<PathBuf>,
        search_locations: Vec<PathBuf>,
        loader: Arc<dyn DataLoader>,
    ) -> Self {
        Self {
            name,
            origin: Some(origin.into()),
            submodule_search_locations: Some(search_locations),
            loader,
        }
    }

    /// A namespace package spread over one or more portions, with no origin.
    pub fn namespace(
        name: ModuleName,
        search_locations: Vec<PathBuf>,
        loader: Arc<dyn DataLoader>,
    ) -> Self {
        Self {
            name,
            origin: None,
            submodule_search_locations: Some(search_locations),
            loader,
        }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Location of the defining source, if there is a single one.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Where submodules are searched for. `None` for leaf modules.
    pub fn search_locations(&self) -> Option<&[PathBuf]> {
        self.submodule_search_locations.as_deref()
    }

    pub fn is_package(&self) -> bool {
        self.submodule_search_locations.is_some()
    }

    pub fn loader(&self) -> &Arc<dyn DataLoader> {
        &self.loader
    }
}

impl fmt::Debug for ModuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSpec")
            .field("name", &self.name.to_dotted())
            .field("origin", &self.origin)
            .field("search_locations", &self.submodule_search_locations)
            .field("loader", &self.loader)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::loader::FileLoader;

    fn name(s: &str) -> ModuleName {
        ModuleName::parse(s).unwrap()
    }

    #[test]
    fn module_is_not_a_package() {
        let spec = ModuleSpec::module(name("data.util"), "/src/data/util.py", Arc::new(FileLoader));
        assert!(!spec.is_package());
        assert_eq!(spec.origin(), Some(Path::new("/src/data/util.py")));
        assert!(spec.search_locations().is_none());
    }

    #[test]
    fn package_with_empty_locations_is_still_a_package() {
        let spec = ModuleSpec::package(
            name("testingpackage"),
            "does-not-exist",
            Vec::new(),
            Arc::new(FileLoader),
        );
        assert!(spec.is_package());
        assert_eq!(spec.search_locations(), Some(&[][..]));
    }

    #[test]
    fn namespace_has_no_origin() {
        let spec = ModuleSpec::namespace(
            name("ns"),
            vec![PathBuf::from("/a/ns"), PathBuf::from("/b/ns")],
            Arc::new(FileLoader),
        );
        assert!(spec.is_package());
        assert!(spec.origin().is_none());
        assert_eq!(spec.search_locations().map(<[PathBuf]>::len), Some(2));
    }
}
