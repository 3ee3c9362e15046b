//! End-to-end tests through `StructuralAnalyzer`.

use std::path::Path;

use tangle_analysis::input::{DeclarationKind, ImportKind, ParsedFile};
use tangle_analysis::{StructuralAnalyzer, StructuralReport};
use tangle_core::config::{LayerDefinition, TangleConfig};
use tangle_core::errors::{AnalysisError, ConfigError};

fn analyze(config: &TangleConfig, files: Vec<ParsedFile>) -> StructuralReport {
    let analyzer = StructuralAnalyzer::new(config).unwrap();
    analyzer.analyze(Path::new("/repo"), files)
}

fn sample_project() -> Vec<ParsedFile> {
    vec![
        ParsedFile::new("/repo/src/adapters/http.ts")
            .import("../engine/core", ImportKind::StaticImport, &["run"])
            .import("../application/service", ImportKind::StaticImport, &["serve"])
            .import("express", ImportKind::StaticImport, &["default"]),
        ParsedFile::new("/repo/src/application/service.ts")
            .import("../engine/core", ImportKind::StaticImport, &["run"])
            .export("serve", DeclarationKind::Function)
            .export("legacy", DeclarationKind::Function),
        ParsedFile::new("/repo/src/engine/core.ts")
            .import("./registry", ImportKind::StaticImport, &["lookup"])
            .export("run", DeclarationKind::Function),
        ParsedFile::new("/repo/src/engine/registry.ts")
            .import("./core", ImportKind::TypeOnlyImport, &["run"])
            .export("lookup", DeclarationKind::Function),
        ParsedFile::new("/repo/src/engine/core.spec.ts")
            .import("./core", ImportKind::StaticImport, &["run"])
            .import("./registry", ImportKind::StaticImport, &["lookup", "reset"]),
    ]
}

fn layered_config() -> TangleConfig {
    let mut config = TangleConfig::default();
    config.layers.definitions = vec![
        LayerDefinition::new("adapters", "src/adapters/**"),
        LayerDefinition::new("application", "src/application/**"),
        LayerDefinition::new("engine", "src/engine/**"),
    ];
    config
        .layers
        .allowed_dependencies
        .insert("adapters".to_string(), vec!["application".to_string()]);
    config
        .layers
        .allowed_dependencies
        .insert("application".to_string(), vec!["engine".to_string()]);
    config
}

#[test]
fn test_fan_stats_on_empty_graph() {
    let report = analyze(
        &TangleConfig::default(),
        vec![ParsedFile::new("a.ts"), ParsedFile::new("b.ts")],
    );
    assert!(report.cycles.is_empty());
    assert!(report.fan_in.is_empty());
    assert!(report.fan_out.is_empty());
    assert!(report.cuts.is_empty());
    assert!(report.hotspots.is_empty());
    assert_eq!(report.summary.modules, 2);
    assert_eq!(report.summary.health_score, 100.0);
}

#[test]
fn test_no_input_at_all() {
    let report = analyze(&TangleConfig::default(), Vec::new());
    assert!(report.adjacency.is_empty());
    assert!(report.dead_exports.is_empty());
    assert_eq!(report.summary.modules, 0);
    assert_eq!(report.summary.edges, 0);
    assert_eq!(report.summary.health_score, 100.0);
}

#[test]
fn test_full_report() {
    let report = analyze(&layered_config(), sample_project());

    // core <-> registry
    assert_eq!(report.cycles.len(), 1);
    assert_eq!(
        report.cycles[0].path,
        vec!["src/engine/core.ts", "src/engine/registry.ts"]
    );
    assert_eq!(report.cuts.len(), 2);

    // adapters -> engine is not allowed
    assert_eq!(report.layer_violations.len(), 1);
    assert_eq!(report.layer_violations[0].from_module, "src/adapters/http.ts");
    assert_eq!(report.layer_violations[0].to_layer, "engine");

    // `legacy` has no importer
    let dead: Vec<(&str, &str)> = report
        .dead_exports
        .iter()
        .map(|f| (f.module.as_str(), f.name.as_str()))
        .collect();
    assert_eq!(dead, vec![("src/application/service.ts", "legacy")]);

    // core is imported by http, service, registry and the test file
    assert_eq!(report.fan_in[0].module, "src/engine/core.ts");
    assert_eq!(report.fan_in[0].count, 4);
    assert_eq!(report.fan_out[0].module, "src/adapters/http.ts");
    assert_eq!(report.fan_out[0].count, 2);

    assert!(report.adjacency["src/adapters/http.ts"]
        .iter()
        .all(|m| m.starts_with("src/")));
    assert_eq!(report.summary.cycles, 1);
    assert_eq!(report.summary.layer_violations, 1);
    assert!(report.summary.health_score < 100.0);
}

#[test]
fn test_order_independence() {
    let mut reversed = sample_project();
    reversed.reverse();
    let forward = analyze(&layered_config(), sample_project());
    let backward = analyze(&layered_config(), reversed);
    assert_eq!(forward, backward);
    assert_eq!(forward.to_json().unwrap(), backward.to_json().unwrap());
}

#[test]
fn test_fan_top_n_limits_lists() {
    let mut config = TangleConfig::default();
    config.report.fan_top_n = Some(1);
    let report = analyze(&config, sample_project());
    assert_eq!(report.fan_in.len(), 1);
    assert_eq!(report.fan_out.len(), 1);
}

#[test]
fn test_ignore_type_only_breaks_type_cycles() {
    let mut config = TangleConfig::default();
    config.cycles.ignore_type_only = Some(true);
    let report = analyze(&config, sample_project());
    assert!(report.cycles.is_empty());
    // Liveness still sees the type-only import site.
    assert_eq!(report.dead_exports.len(), 1);
    assert_eq!(report.dead_exports[0].name, "legacy");
}

#[test]
fn test_report_json_shape() {
    let report = analyze(&layered_config(), sample_project());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    for key in [
        "cycles",
        "fanIn",
        "fanOut",
        "cuts",
        "layerViolations",
        "deadExports",
        "adjacency",
        "hotspots",
        "summary",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["cycles"][0]["severity"], "info");
    assert_eq!(json["cuts"][0]["cyclesBroken"], 1);
    assert!(json["summary"]["healthScore"].is_f64());
}

#[test]
fn test_invalid_layer_config_rejected() {
    let mut config = layered_config();
    config
        .layers
        .allowed_dependencies
        .insert("engine".to_string(), vec!["infrastructure".to_string()]);
    let err = StructuralAnalyzer::new(&config).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Config(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_invalid_glob_rejected() {
    let mut config = TangleConfig::default();
    config.exports.entry_points = vec!["src/[".to_string()];
    let err = StructuralAnalyzer::new(&config).unwrap_err();
    match err {
        AnalysisError::InvalidGlob { field, pattern, .. } => {
            assert_eq!(field, "exports.entry_points");
            assert_eq!(pattern, "src/[");
        }
        other => panic!("unexpected error: {other}"),
    }
}
