//! The structural report and its health score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::structural::coupling::{Hotspot, HotspotSignal};
use crate::structural::cycles::{Cycle, CycleCut, CycleSeverity};
use crate::structural::exports::DeadExportFinding;
use crate::structural::layers::LayerViolation;

/// Fan-in or fan-out count of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanStat {
    pub module: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub modules: usize,
    pub edges: usize,
    pub cycles: usize,
    pub truncated_components: usize,
    pub layer_violations: usize,
    pub dead_exports: usize,
    pub hotspots: usize,
    /// 0 to 100, higher is healthier.
    pub health_score: f64,
}

/// Everything the engine derives from one module graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralReport {
    pub cycles: Vec<Cycle>,
    pub fan_in: Vec<FanStat>,
    pub fan_out: Vec<FanStat>,
    pub cuts: Vec<CycleCut>,
    pub layer_violations: Vec<LayerViolation>,
    pub dead_exports: Vec<DeadExportFinding>,
    pub adjacency: BTreeMap<String, Vec<String>>,
    pub hotspots: Vec<Hotspot>,
    pub summary: ReportSummary,
}

impl StructuralReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Top `n` modules by count, highest first, ties by module path. Zero
/// counts are dropped.
pub(crate) fn top_fan(mut stats: Vec<FanStat>, n: usize) -> Vec<FanStat> {
    stats.retain(|s| s.count > 0);
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.module.cmp(&b.module)));
    stats.truncate(n);
    stats
}

/// Start at 100 and deduct per finding: 15 / 8 / 3 per critical / warning /
/// info cycle, 2 per god module, 1 per off-main-sequence module, 0.5 per
/// layer violation. Clamped to [0, 100].
pub fn health_score(cycles: &[Cycle], hotspots: &[Hotspot], layer_violations: usize) -> f64 {
    let mut score = 100.0;
    for cycle in cycles {
        score -= match cycle.severity {
            CycleSeverity::Critical => 15.0,
            CycleSeverity::Warning => 8.0,
            CycleSeverity::Info => 3.0,
        };
    }
    for hotspot in hotspots {
        if hotspot.has_signal(HotspotSignal::GodModule) {
            score -= 2.0;
        }
        if hotspot.has_signal(HotspotSignal::OffMainSequence) {
            score -= 1.0;
        }
    }
    score -= layer_violations as f64 * 0.5;
    f64::clamp(score, 0.0, 100.0)
}
