//! Domain models for modules and packages

pub mod module_name;
pub mod module_spec;

pub use module_name::ModuleName;
pub use module_spec::ModuleSpec;
