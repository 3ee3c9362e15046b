//! Robert C. Martin coupling metrics computation.

use rayon::prelude::*;
use tangle_core::types::ModuleId;

use super::types::{CouplingMetrics, ModuleCoupling};
use super::zones::classify_zone;
use crate::structural::graph::ModuleGraph;

/// Compute metrics for every module, in module (sorted path) order.
pub fn compute_coupling_metrics(graph: &ModuleGraph) -> Vec<ModuleCoupling> {
    let ids: Vec<ModuleId> = graph.module_ids().collect();
    ids.par_iter()
        .map(|&id| {
            let metrics = metrics_for(graph, id);
            ModuleCoupling {
                module: graph.module_name(id).to_string(),
                zone: classify_zone(&metrics),
                metrics,
            }
        })
        .collect()
}

/// Metrics of a single module.
pub fn metrics_for(graph: &ModuleGraph, id: ModuleId) -> CouplingMetrics {
    let fan_in = graph.fan_in(id);
    let fan_out = graph.fan_out(id);

    // I = Ce / (Ca + Ce), 0 if both are 0
    let instability = if fan_in + fan_out == 0 {
        0.0
    } else {
        fan_out as f64 / (fan_in + fan_out) as f64
    };

    // A = abstract types / types; functions and values never count
    let (abstract_count, type_count) = graph
        .exports_of(id)
        .iter()
        .filter(|e| e.declaration_kind.is_type_declaration())
        .fold((0u32, 0u32), |(abs, total), e| {
            (abs + u32::from(e.declaration_kind.is_abstract()), total + 1)
        });
    let abstractness = if type_count == 0 {
        0.0
    } else {
        abstract_count as f64 / type_count as f64
    };

    // D = |A + I - 1|
    let distance = (abstractness + instability - 1.0).abs();

    CouplingMetrics {
        fan_in,
        fan_out,
        instability,
        abstractness,
        distance,
    }
}
