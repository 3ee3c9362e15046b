//! Graph builder integration tests: resolution, edge collapsing, adjacency.

use tangle_analysis::input::{DeclarationKind, ImportKind, ParsedFile};
use tangle_analysis::structural::graph::{ModuleGraph, ModuleGraphBuilder};

fn build(files: Vec<ParsedFile>) -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new("/repo");
    builder.add_files(files);
    builder.build()
}

#[test]
fn test_non_relative_imports_ignored() {
    let graph = build(vec![
        ParsedFile::new("/repo/src/app.ts").import("react", ImportKind::StaticImport, &["default"]),
        ParsedFile::new("/repo/src/lib.ts"),
    ]);
    let app = graph.module_id("src/app.ts").unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.fan_out(app), 0);
    assert_eq!(graph.fan_in(app), 0);
    assert!(graph.import_sites().is_empty());
}

#[test]
fn test_resolution_probes_extensions_and_index() {
    let graph = build(vec![
        ParsedFile::new("/repo/src/main.ts")
            .import("./util.js", ImportKind::StaticImport, &["helper"])
            .import("./components", ImportKind::StaticImport, &["Button"])
            .import("./types", ImportKind::TypeOnlyImport, &["Props"])
            .import("../config.mjs", ImportKind::DynamicImport, &[]),
        ParsedFile::new("/repo/src/util.ts"),
        ParsedFile::new("/repo/src/components/index.tsx"),
        ParsedFile::new("/repo/src/types.d.ts"),
        ParsedFile::new("/repo/config.mts"),
    ]);

    let adjacency = graph.adjacency();
    assert_eq!(
        adjacency["src/main.ts"],
        vec!["config.mts", "src/components/index.tsx", "src/types.d.ts", "src/util.ts"]
    );
}

#[test]
fn test_every_edge_endpoint_is_a_module() {
    let graph = build(vec![
        ParsedFile::new("a.ts")
            .import("./b", ImportKind::StaticImport, &["b"])
            .import("./ghost", ImportKind::StaticImport, &["g"]),
        ParsedFile::new("b.ts").import("./a", ImportKind::ExportFrom, &["*"]),
    ]);
    for (from, to) in graph.edges() {
        assert!(from.index() < graph.module_count());
        assert!(to.index() < graph.module_count());
    }
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_adjacency_is_order_independent() {
    let files = vec![
        ParsedFile::new("src/c.ts").import("./a", ImportKind::StaticImport, &["a"]),
        ParsedFile::new("src/a.ts").import("./b", ImportKind::StaticImport, &["b"]),
        ParsedFile::new("src/b.ts")
            .import("./c", ImportKind::DynamicImport, &[])
            .export("b", DeclarationKind::Function),
    ];
    let mut reversed = files.clone();
    reversed.reverse();

    let forward = build(files);
    let backward = build(reversed);
    assert_eq!(forward.adjacency(), backward.adjacency());
    assert_eq!(forward.import_sites(), backward.import_sites());
}

#[test]
fn test_edge_kinds_are_retained() {
    let graph = build(vec![
        ParsedFile::new("a.ts")
            .import("./b", ImportKind::DynamicImport, &[])
            .import("./b", ImportKind::StaticImport, &["x"]),
        ParsedFile::new("b.ts"),
    ]);
    let a = graph.module_id("a.ts").unwrap();
    let b = graph.module_id("b.ts").unwrap();
    assert_eq!(
        graph.edge_kinds(a, b),
        Some(&[ImportKind::StaticImport, ImportKind::DynamicImport][..])
    );
    assert_eq!(graph.edge_kinds(b, a), None);
}

#[test]
fn test_parsed_file_deserializes_from_json() {
    let json = r#"{
        "path": "/repo/src/a.ts",
        "imports": [
            { "specifier": "./b", "kind": "type-only-import", "names": ["T"] },
            { "specifier": "./c", "kind": "export-from", "names": ["*"] }
        ],
        "exports": [
            { "name": "Shape", "declarationKind": "abstract-class" }
        ]
    }"#;
    let file: ParsedFile = serde_json::from_str(json).unwrap();
    assert_eq!(file.imports[0].kind, ImportKind::TypeOnlyImport);
    assert!(file.imports[1].uses_whole_module());
    assert_eq!(file.exports[0].declaration_kind, DeclarationKind::AbstractClass);
}
