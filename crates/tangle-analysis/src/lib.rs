//! Module dependency graph and coupling analysis for TS/JS projects.
//!
//! Consumes per-file import/export records, builds a module graph and derives
//! cycles, dead exports, layer violations and coupling hotspots from it.

pub mod engine;
pub mod input;
pub mod structural;

pub use engine::{StructuralAnalyzer, StructuralReport};
pub use input::{DeclarationKind, ExportRecord, ImportKind, ImportRecord, ParsedFile};
pub use structural::graph::{ModuleGraph, ModuleGraphBuilder};
