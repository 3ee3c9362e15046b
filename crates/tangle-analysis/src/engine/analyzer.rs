//! Structural analyzer: builds the module graph and runs every detector.

use std::path::Path;
use std::time::Instant;

use tangle_core::config::{CouplingConfig, TangleConfig};
use tangle_core::errors::AnalysisResult;

use super::report::{health_score, top_fan, FanStat, ReportSummary, StructuralReport};
use crate::input::ParsedFile;
use crate::structural::coupling::{classify_hotspots, compute_coupling_metrics};
use crate::structural::cycles::{detect_cycles, CycleLimits};
use crate::structural::exports::{find_dead_exports, ExportLiveness};
use crate::structural::graph::{ModuleGraph, ModuleGraphBuilder};
use crate::structural::layers::{validate_layers, LayerRules};

/// Runs the full structural analysis with one validated configuration.
///
/// Construction compiles every configured glob and checks layer names, so
/// `analyze` itself never fails.
#[derive(Debug, Clone)]
pub struct StructuralAnalyzer {
    cycle_limits: CycleLimits,
    ignore_type_only: bool,
    liveness: ExportLiveness,
    layer_rules: LayerRules,
    coupling: CouplingConfig,
    fan_top_n: usize,
}

impl StructuralAnalyzer {
    pub fn new(config: &TangleConfig) -> AnalysisResult<Self> {
        // Glob compilation first, so a bad pattern names its pattern.
        let liveness = ExportLiveness::from_config(&config.exports)?;
        TangleConfig::validate(config)?;
        Ok(Self {
            cycle_limits: CycleLimits::from_config(&config.cycles),
            ignore_type_only: config.cycles.effective_ignore_type_only(),
            liveness,
            layer_rules: LayerRules::from_config(&config.layers)?,
            coupling: config.coupling.clone(),
            fan_top_n: config.report.effective_fan_top_n(),
        })
    }

    /// Build the graph for `files` under `root` and analyze it.
    pub fn analyze<I>(&self, root: &Path, files: I) -> StructuralReport
    where
        I: IntoIterator<Item = ParsedFile>,
    {
        let span = tracing::info_span!("structural_analysis", root = %root.display());
        let _guard = span.enter();
        let start = Instant::now();

        let mut builder = ModuleGraphBuilder::new(root).ignore_type_only(self.ignore_type_only);
        builder.add_files(files);
        let graph = builder.build();

        let report = self.analyze_graph(&graph);
        tracing::info!(
            modules = report.summary.modules,
            cycles = report.summary.cycles,
            hotspots = report.summary.hotspots,
            health_score = report.summary.health_score,
            duration_ms = start.elapsed().as_millis() as u64,
            "structural analysis complete"
        );
        report
    }

    /// Analyze an already built graph.
    pub fn analyze_graph(&self, graph: &ModuleGraph) -> StructuralReport {
        let cycle_analysis = detect_cycles(graph, &self.cycle_limits);
        let dead_exports = find_dead_exports(graph, &self.liveness);
        let layer_violations = validate_layers(graph, &self.layer_rules);
        let metrics = compute_coupling_metrics(graph);
        let hotspots = classify_hotspots(&metrics, &self.coupling);

        let fan_in = top_fan(
            graph
                .modules()
                .map(|(id, module)| FanStat {
                    module: module.to_string(),
                    count: graph.fan_in(id),
                })
                .collect(),
            self.fan_top_n,
        );
        let fan_out = top_fan(
            graph
                .modules()
                .map(|(id, module)| FanStat {
                    module: module.to_string(),
                    count: graph.fan_out(id),
                })
                .collect(),
            self.fan_top_n,
        );

        let summary = ReportSummary {
            modules: graph.module_count(),
            edges: graph.edge_count(),
            cycles: cycle_analysis.cycles.len(),
            truncated_components: cycle_analysis.truncated_components,
            layer_violations: layer_violations.len(),
            dead_exports: dead_exports.len(),
            hotspots: hotspots.len(),
            health_score: health_score(&cycle_analysis.cycles, &hotspots, layer_violations.len()),
        };

        StructuralReport {
            cycles: cycle_analysis.cycles,
            fan_in,
            fan_out,
            cuts: cycle_analysis.cuts,
            layer_violations,
            dead_exports,
            adjacency: graph.adjacency(),
            hotspots,
            summary,
        }
    }
}
