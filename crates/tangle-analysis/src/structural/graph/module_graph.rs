//! The module graph: an arena of modules plus collapsed import edges.
//!
//! Modules live in a `ModuleInterner` and a petgraph node arena whose
//! indices coincide, so a `ModuleId` addresses both. Multiple import
//! statements between the same pair collapse into one edge carrying the set
//! of kinds that produced it.

use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use tangle_core::types::collections::{SmallVec2, SmallVec4};
use tangle_core::types::{ModuleId, ModuleInterner};

use crate::input::{ExportRecord, ImportKind};

/// Kinds of import statements behind one collapsed edge, sorted.
pub type EdgeKinds = SmallVec2<ImportKind>;

/// One resolved import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSite {
    pub from: ModuleId,
    pub to: ModuleId,
    pub kind: ImportKind,
    /// Imported binding names as exported by `to`.
    pub names: SmallVec4<String>,
    /// Namespace import, `export *`, or nameless dynamic import.
    pub whole_module: bool,
}

impl ImportSite {
    /// Does this site reference export `name` of its target?
    pub fn references(&self, name: &str) -> bool {
        self.whole_module || self.names.iter().any(|n| n == name)
    }
}

/// Immutable module dependency graph.
#[derive(Debug)]
pub struct ModuleGraph {
    pub(crate) interner: ModuleInterner,
    pub(crate) graph: DiGraph<ModuleId, EdgeKinds>,
    pub(crate) successors: Vec<Vec<ModuleId>>,
    pub(crate) predecessors: Vec<Vec<ModuleId>>,
    pub(crate) exports: Vec<Vec<ExportRecord>>,
    pub(crate) import_sites: Vec<ImportSite>,
}

impl ModuleGraph {
    pub fn module_count(&self) -> usize {
        self.interner.len()
    }

    /// Number of collapsed edges, self-edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Path of a module. Empty for ids that do not belong to this graph.
    pub fn module_name(&self, id: ModuleId) -> &str {
        self.interner.resolve(id).unwrap_or_default()
    }

    pub fn module_id(&self, name: &str) -> Option<ModuleId> {
        self.interner.get(name)
    }

    /// All modules in id order (which is sorted path order).
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &str)> {
        self.interner.iter()
    }

    pub fn module_ids(&self) -> impl Iterator<Item = ModuleId> {
        (0..self.module_count()).map(ModuleId::new)
    }

    /// Distinct direct dependencies, ascending. Includes `id` on a self-import.
    pub fn successors(&self, id: ModuleId) -> &[ModuleId] {
        self.successors.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct direct dependents, ascending. Includes `id` on a self-import.
    pub fn predecessors(&self, id: ModuleId) -> &[ModuleId] {
        self.predecessors.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ca: distinct other modules importing `id`.
    pub fn fan_in(&self, id: ModuleId) -> u32 {
        self.predecessors(id).iter().filter(|&&m| m != id).count() as u32
    }

    /// Ce: distinct other modules imported by `id`.
    pub fn fan_out(&self, id: ModuleId) -> u32 {
        self.successors(id).iter().filter(|&&m| m != id).count() as u32
    }

    pub fn has_self_edge(&self, id: ModuleId) -> bool {
        self.successors(id).binary_search(&id).is_ok()
    }

    /// Import kinds behind the edge `from -> to`, if it exists.
    pub fn edge_kinds(&self, from: ModuleId, to: ModuleId) -> Option<&[ImportKind]> {
        let edge = self.graph.find_edge(node(from), node(to))?;
        self.graph.edge_weight(edge).map(|kinds| kinds.as_slice())
    }

    /// Every collapsed edge as `(from, to)`, ordered by `from` then `to`.
    pub fn edges(&self) -> impl Iterator<Item = (ModuleId, ModuleId)> + '_ {
        self.module_ids()
            .flat_map(move |from| self.successors(from).iter().map(move |&to| (from, to)))
    }

    /// Resolved import statements, ordered by importing module.
    pub fn import_sites(&self) -> &[ImportSite] {
        &self.import_sites
    }

    /// Exported symbols of a module, sorted by name.
    pub fn exports_of(&self, id: ModuleId) -> &[ExportRecord] {
        self.exports.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `module -> sorted dependencies` for every module.
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.modules()
            .map(|(id, name)| {
                let targets = self
                    .successors(id)
                    .iter()
                    .map(|&to| self.module_name(to).to_string())
                    .collect();
                (name.to_string(), targets)
            })
            .collect()
    }

    /// Underlying petgraph arena, for graph algorithms.
    pub(crate) fn petgraph(&self) -> &DiGraph<ModuleId, EdgeKinds> {
        &self.graph
    }
}

/// Node index of a module; nodes are added in id order.
pub(crate) fn node(id: ModuleId) -> NodeIndex {
    NodeIndex::new(id.index())
}
