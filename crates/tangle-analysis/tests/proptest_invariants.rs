//! Property-based tests for graph and metric invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - input order never changes the report
//!   - Martin metrics stay in [0, 1]
//!   - reported cycles are real, rotated, and unique by module set

use std::path::Path;

use proptest::prelude::*;

use tangle_analysis::input::{DeclarationKind, ImportKind, ParsedFile};
use tangle_analysis::structural::coupling::compute_coupling_metrics;
use tangle_analysis::structural::cycles::{detect_cycles, CycleLimits};
use tangle_analysis::structural::graph::{ModuleGraph, ModuleGraphBuilder};
use tangle_analysis::StructuralAnalyzer;
use tangle_core::config::TangleConfig;
use tangle_core::types::collections::FxHashSet;

const KINDS: [ImportKind; 4] = [
    ImportKind::StaticImport,
    ImportKind::ExportFrom,
    ImportKind::TypeOnlyImport,
    ImportKind::DynamicImport,
];

const DECLS: [DeclarationKind; 4] = [
    DeclarationKind::Function,
    DeclarationKind::Class,
    DeclarationKind::AbstractClass,
    DeclarationKind::Interface,
];

/// Files `m0.ts .. m{n-1}.ts`, each edge `(from, to, kind)` one import.
fn files_for(n: usize, edges: &[(usize, usize, usize)], decls: &[usize]) -> Vec<ParsedFile> {
    let mut files: Vec<ParsedFile> = (0..n)
        .map(|i| {
            let decl = DECLS[decls.get(i).copied().unwrap_or(0) % DECLS.len()];
            ParsedFile::new(format!("src/m{i}.ts")).export(&format!("e{i}"), decl)
        })
        .collect();
    for &(from, to, kind) in edges {
        let (from, to) = (from % n, to % n);
        let file = std::mem::take(&mut files[from]);
        files[from] = file.import(
            &format!("./m{to}"),
            KINDS[kind % KINDS.len()],
            &[format!("e{to}").as_str()],
        );
    }
    files
}

fn build(files: Vec<ParsedFile>) -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new("/repo");
    builder.add_files(files);
    builder.build()
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, usize)>, Vec<usize>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0usize..4), 0..24),
            prop::collection::vec(0usize..4, n),
        )
    })
}

proptest! {
    /// Reversing the input order never changes the report.
    #[test]
    fn prop_report_order_independent((n, edges, decls) in graph_strategy()) {
        let files = files_for(n, &edges, &decls);
        let mut reversed = files.clone();
        reversed.reverse();

        let analyzer = StructuralAnalyzer::new(&TangleConfig::default()).unwrap();
        let forward = analyzer.analyze(Path::new("/repo"), files);
        let backward = analyzer.analyze(Path::new("/repo"), reversed);
        prop_assert_eq!(forward, backward);
    }

    /// I, A and D are always in [0, 1], and D = |A + I - 1|.
    #[test]
    fn prop_metrics_bounded((n, edges, decls) in graph_strategy()) {
        let graph = build(files_for(n, &edges, &decls));
        for m in compute_coupling_metrics(&graph) {
            let c = m.metrics;
            prop_assert!((0.0..=1.0).contains(&c.instability), "I = {}", c.instability);
            prop_assert!((0.0..=1.0).contains(&c.abstractness), "A = {}", c.abstractness);
            prop_assert!((0.0..=1.0).contains(&c.distance), "D = {}", c.distance);
            prop_assert!((c.distance - (c.abstractness + c.instability - 1.0).abs()).abs() < 1e-12);
        }
    }

    /// Total fan-in equals total fan-out: both count non-self edges.
    #[test]
    fn prop_fan_totals_match((n, edges, decls) in graph_strategy()) {
        let graph = build(files_for(n, &edges, &decls));
        let fan_in: u32 = graph.module_ids().map(|id| graph.fan_in(id)).sum();
        let fan_out: u32 = graph.module_ids().map(|id| graph.fan_out(id)).sum();
        prop_assert_eq!(fan_in, fan_out);
    }

    /// Every reported cycle is a closed path of real edges, starts at its
    /// smallest module, and no two cycles share a module set.
    #[test]
    fn prop_cycles_valid_and_unique((n, edges, decls) in graph_strategy()) {
        let graph = build(files_for(n, &edges, &decls));
        let result = detect_cycles(&graph, &CycleLimits::default());

        let mut keys = FxHashSet::default();
        for cycle in &result.cycles {
            prop_assert!(!cycle.path.is_empty());
            let min = cycle.path.iter().min().unwrap();
            prop_assert_eq!(&cycle.path[0], min);
            for (i, from) in cycle.path.iter().enumerate() {
                let to = &cycle.path[(i + 1) % cycle.path.len()];
                let from_id = graph.module_id(from).unwrap();
                let to_id = graph.module_id(to).unwrap();
                prop_assert!(graph.edge_kinds(from_id, to_id).is_some());
            }
            prop_assert!(keys.insert(cycle.canonical_key()), "duplicate cycle {:?}", cycle.path);
        }
    }
}
