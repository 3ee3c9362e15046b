//! Module resolution and graph construction.

pub mod builder;
pub mod module_graph;
pub mod resolver;

pub use builder::{BuildStats, ModuleGraphBuilder};
pub use module_graph::{EdgeKinds, ImportSite, ModuleGraph};
pub use resolver::{is_relative_specifier, module_id_for_path, resolve_specifier};
