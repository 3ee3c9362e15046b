//! Cycle detection: Tarjan's SCC, then bounded elementary-cycle enumeration
//! inside each component.

use std::collections::BTreeMap;

use petgraph::algo::tarjan_scc;
use rayon::prelude::*;
use tangle_core::types::collections::{FxHashMap, FxHashSet};
use tangle_core::types::ModuleId;

use super::types::{canonical_key, Cycle, CycleAnalysis, CycleCut, CycleLimits, CycleSeverity};
use crate::structural::graph::ModuleGraph;

/// Raw cycles of one component plus whether enumeration was cut short.
#[derive(Debug, Default)]
struct ComponentCycles {
    cycles: Vec<Vec<ModuleId>>,
    truncated: bool,
}

/// Find all cycles of the graph, deduplicated, capped per component.
pub fn detect_cycles(graph: &ModuleGraph, limits: &CycleLimits) -> CycleAnalysis {
    let components = strongly_connected_components(graph);

    let mut component_of = vec![0usize; graph.module_count()];
    for (index, members) in components.iter().enumerate() {
        for id in members {
            component_of[id.index()] = index;
        }
    }

    let mut enumerated: Vec<ComponentCycles> = components
        .par_iter()
        .map(|members| {
            if members.len() < 2 {
                ComponentCycles::default()
            } else {
                enumerate_component(graph, members, limits)
            }
        })
        .collect();

    // Self-imports are cycles regardless of component size.
    for id in graph.module_ids().filter(|&id| graph.has_self_edge(id)) {
        enumerated[component_of[id.index()]].cycles.insert(0, vec![id]);
    }

    let truncated_components = enumerated.iter().filter(|c| c.truncated).count();
    for (members, found) in components.iter().zip(&enumerated) {
        if found.truncated {
            tracing::warn!(
                component_size = members.len(),
                cycles_kept = found.cycles.len(),
                max_cycles = limits.max_cycles_per_scc,
                "cycle enumeration truncated"
            );
        }
    }

    // Components are disjoint and already deduplicated internally.
    let by_component: BTreeMap<usize, Vec<Vec<ModuleId>>> = enumerated
        .into_iter()
        .enumerate()
        .filter(|(_, found)| !found.cycles.is_empty())
        .map(|(index, found)| (index, found.cycles))
        .collect();

    let cuts = compute_cuts(graph, &by_component);
    let cyclic_components = by_component.len();

    let mut cycles: Vec<Cycle> = by_component
        .into_values()
        .flatten()
        .map(|ids| to_cycle(graph, &ids))
        .collect();
    cycles.sort_by(|a, b| a.path.len().cmp(&b.path.len()).then_with(|| a.path.cmp(&b.path)));

    tracing::debug!(
        cycles = cycles.len(),
        cyclic_components,
        truncated_components,
        "cycle detection complete"
    );

    CycleAnalysis {
        cycles,
        cuts,
        cyclic_components,
        truncated_components,
    }
}

/// Tarjan SCCs with members sorted, components ordered by smallest member.
pub fn strongly_connected_components(graph: &ModuleGraph) -> Vec<Vec<ModuleId>> {
    let pg = graph.petgraph();
    let mut components: Vec<Vec<ModuleId>> = tarjan_scc(pg)
        .into_iter()
        .map(|scc| {
            let mut members: Vec<ModuleId> = scc.into_iter().map(|n| pg[n]).collect();
            members.sort_unstable();
            members
        })
        .collect();
    components.sort_unstable_by_key(|members| members.first().copied());
    components
}

/// Enumerate elementary cycles of one component.
///
/// Each circuit is found exactly once, from its smallest member: the DFS
/// started at `start` only enters members greater than `start`. Successors
/// are visited in ascending order. Circuits over an already reported module
/// set are dropped before they count against the cap. The component is
/// truncated only when a distinct cycle beyond the cap turns up or the step
/// budget runs out.
fn enumerate_component(
    graph: &ModuleGraph,
    members: &[ModuleId],
    limits: &CycleLimits,
) -> ComponentCycles {
    let member_set: FxHashSet<ModuleId> = members.iter().copied().collect();
    let mut result = ComponentCycles::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut steps = 0usize;

    'starts: for &start in members {
        let mut path: Vec<ModuleId> = vec![start];
        let mut on_path: FxHashSet<ModuleId> = FxHashSet::default();
        on_path.insert(start);
        let mut stack: Vec<(ModuleId, usize)> = vec![(start, 0)];

        while let Some(&(current, next)) = stack.last() {
            steps += 1;
            if steps > limits.max_search_steps {
                result.truncated = true;
                break 'starts;
            }

            let successors = graph.successors(current);
            if next >= successors.len() {
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
                continue;
            }
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let succ = successors[next];
            if succ == start {
                if path.len() > 1 {
                    let key = canonical_key(path.iter().map(|&id| graph.module_name(id)));
                    if !seen.contains(&key) {
                        if result.cycles.len() >= limits.max_cycles_per_scc {
                            result.truncated = true;
                            break 'starts;
                        }
                        seen.insert(key);
                        result.cycles.push(path.clone());
                    }
                }
                continue;
            }
            if succ < start || !member_set.contains(&succ) || on_path.contains(&succ) {
                continue;
            }
            path.push(succ);
            on_path.insert(succ);
            stack.push((succ, 0));
        }
    }

    result
}

fn to_cycle(graph: &ModuleGraph, ids: &[ModuleId]) -> Cycle {
    let mut path: Vec<String> = ids.iter().map(|&id| graph.module_name(id).to_string()).collect();
    if let Some(min_pos) = path
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
    {
        path.rotate_left(min_pos);
    }
    let severity = CycleSeverity::for_length(path.len());
    Cycle { path, severity }
}

/// Per component, the edges that run through the most reported cycles.
///
/// When some edge lies on every cycle of its component, those edges are
/// exactly the ones kept.
fn compute_cuts(
    graph: &ModuleGraph,
    by_component: &BTreeMap<usize, Vec<Vec<ModuleId>>>,
) -> Vec<CycleCut> {
    let mut cuts = Vec::new();
    for cycles in by_component.values() {
        let mut counts: FxHashMap<(ModuleId, ModuleId), usize> = FxHashMap::default();
        for cycle in cycles {
            for (i, &from) in cycle.iter().enumerate() {
                let to = cycle[(i + 1) % cycle.len()];
                *counts.entry((from, to)).or_default() += 1;
            }
        }
        let best = counts.values().copied().max().unwrap_or(0);
        let total = cycles.len();
        cuts.extend(
            counts
                .into_iter()
                .filter(|&(_, count)| count == best)
                .map(|((from, to), count)| CycleCut {
                    from: graph.module_name(from).to_string(),
                    to: graph.module_name(to).to_string(),
                    cycles_broken: count,
                    breaks_all: count == total,
                }),
        );
    }
    cuts.sort_by(|a, b| {
        b.cycles_broken
            .cmp(&a.cycles_broken)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });
    cuts
}
