//! Builds a `ModuleGraph` from parsed file records.
//!
//! Two phases: every file is mapped to its module id first, so the full
//! module set is known before any specifier is resolved. Modules are then
//! interned in sorted order, which makes ids and every derived ordering
//! independent of the order files were added in.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use petgraph::graph::DiGraph;
use smallvec::smallvec;
use tangle_core::types::collections::SmallVec4;
use tangle_core::types::{ModuleId, ModuleInterner};

use super::module_graph::{node, EdgeKinds, ImportSite, ModuleGraph};
use super::resolver::{is_relative_specifier, module_id_for_path, resolve_specifier};
use crate::input::{ExportRecord, ImportKind, ImportRecord, ParsedFile};

/// Accumulates parsed files and produces an immutable `ModuleGraph`.
#[derive(Debug, Clone)]
pub struct ModuleGraphBuilder {
    root: PathBuf,
    files: Vec<ParsedFile>,
    ignore_type_only: bool,
}

/// Counters reported by a build, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub files_skipped: usize,
    pub bare_specifiers: usize,
    pub unresolved_specifiers: usize,
}

#[derive(Default)]
struct ModuleRecords {
    imports: Vec<ImportRecord>,
    exports: Vec<ExportRecord>,
}

impl ModuleGraphBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            files: Vec::new(),
            ignore_type_only: false,
        }
    }

    /// Keep `import type` statements out of the adjacency. They still count
    /// as export usages.
    pub fn ignore_type_only(mut self, ignore: bool) -> Self {
        self.ignore_type_only = ignore;
        self
    }

    pub fn add_file(&mut self, file: ParsedFile) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn add_files<I>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = ParsedFile>,
    {
        self.files.extend(files);
        self
    }

    pub fn build(self) -> ModuleGraph {
        self.build_with_stats().0
    }

    pub fn build_with_stats(self) -> (ModuleGraph, BuildStats) {
        let mut stats = BuildStats::default();

        // Phase 1: module ids.
        let mut records: BTreeMap<String, ModuleRecords> = BTreeMap::new();
        for file in self.files {
            let Some(module) = module_id_for_path(&self.root, &file.path) else {
                tracing::debug!(path = %file.path, "file outside project root, skipped");
                stats.files_skipped += 1;
                continue;
            };
            let entry = records.entry(module).or_default();
            entry.imports.extend(file.imports);
            entry.exports.extend(file.exports);
        }
        for entry in records.values_mut() {
            entry.imports.sort();
            entry.imports.dedup();
            entry.exports.sort();
            entry.exports.dedup_by(|a, b| a.name == b.name);
        }

        let interner = ModuleInterner::new();
        let mut graph: DiGraph<ModuleId, EdgeKinds> = DiGraph::with_capacity(records.len(), 0);
        for module in records.keys() {
            let id = interner.intern(module);
            let index = graph.add_node(id);
            debug_assert_eq!(index.index(), id.index());
        }

        // Phase 2: resolution.
        let mut import_sites = Vec::new();
        let mut exports = Vec::with_capacity(records.len());
        for (from_index, (module, entry)) in records.iter().enumerate() {
            let from = ModuleId::new(from_index);
            for import in &entry.imports {
                if !is_relative_specifier(&import.specifier) {
                    stats.bare_specifiers += 1;
                    continue;
                }
                let Some(target) =
                    resolve_specifier(module, &import.specifier, |c| records.contains_key(c))
                else {
                    tracing::debug!(
                        module = %module,
                        specifier = %import.specifier,
                        "unresolved relative specifier, skipped"
                    );
                    stats.unresolved_specifiers += 1;
                    continue;
                };
                let Some(to) = interner.get(&target) else {
                    stats.unresolved_specifiers += 1;
                    continue;
                };

                import_sites.push(ImportSite {
                    from,
                    to,
                    kind: import.kind,
                    names: import.names.iter().cloned().collect::<SmallVec4<String>>(),
                    whole_module: import.uses_whole_module(),
                });

                if self.ignore_type_only && import.kind == ImportKind::TypeOnlyImport {
                    continue;
                }
                match graph.find_edge(node(from), node(to)) {
                    Some(edge) => {
                        if let Some(kinds) = graph.edge_weight_mut(edge) {
                            if let Err(pos) = kinds.binary_search(&import.kind) {
                                kinds.insert(pos, import.kind);
                            }
                        }
                    }
                    None => {
                        graph.add_edge(node(from), node(to), smallvec![import.kind]);
                    }
                }
            }
            exports.push(entry.exports.clone());
        }

        let mut successors = vec![Vec::new(); records.len()];
        let mut predecessors = vec![Vec::new(); records.len()];
        for edge in graph.raw_edges() {
            let from = graph[edge.source()];
            let to = graph[edge.target()];
            successors[from.index()].push(to);
            predecessors[to.index()].push(from);
        }
        for list in successors.iter_mut().chain(predecessors.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }

        tracing::info!(
            modules = interner.len(),
            edges = graph.edge_count(),
            import_sites = import_sites.len(),
            files_skipped = stats.files_skipped,
            unresolved = stats.unresolved_specifiers,
            "module graph built"
        );

        let module_graph = ModuleGraph {
            interner,
            graph,
            successors,
            predecessors,
            exports,
            import_sites,
        };
        (module_graph, stats)
    }
}
