// Public modules
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod lookup;
pub mod materialize;
pub mod resolver;
pub mod validate;

// Re-export common types for convenience
pub use catalog::{BuilderCatalog, BuilderDefinition, CatalogKind, Catalogs, CommandTemplate};
pub use descriptor::{BuilderSelection, DescriptorParser, Module, ProjectDescriptor};
pub use error::{Error, ErrorCode, Result};
pub use lookup::{find_module, find_module_commands, get_module_and_commands};
pub use materialize::materialize;
pub use resolver::{resolve, CommandList};
pub use validate::{validate_module_paths, validate_project, ValidationIssue};
