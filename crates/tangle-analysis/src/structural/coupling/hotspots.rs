//! Hotspot classification and ranking.

use tangle_core::config::CouplingConfig;

use super::types::{Hotspot, HotspotSignal, ModuleCoupling};

/// Flag coupled modules and rank them by score, highest first.
///
/// `metrics` covers the whole graph, so its length is the module count used
/// by the god-module threshold. Isolated modules and modules without a
/// signal are left out.
pub fn classify_hotspots(metrics: &[ModuleCoupling], config: &CouplingConfig) -> Vec<Hotspot> {
    let god_threshold = config.god_module_threshold(metrics.len());
    let unstable_instability = config.effective_unstable_instability();
    let unstable_min_fan_out = config.effective_unstable_min_fan_out();
    let off_distance = config.effective_off_main_sequence_distance();
    let off_min_coupling = config.effective_off_main_sequence_min_coupling();

    let max_coupling = metrics
        .iter()
        .map(|m| m.metrics.total_coupling())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut hotspots: Vec<Hotspot> = metrics
        .iter()
        .filter(|m| !m.metrics.is_isolated())
        .filter_map(|m| {
            let c = &m.metrics;
            let mut signals = Vec::new();
            if c.fan_in > god_threshold || c.fan_out > god_threshold {
                signals.push(HotspotSignal::GodModule);
            }
            if c.instability >= unstable_instability && c.fan_out > unstable_min_fan_out {
                signals.push(HotspotSignal::UnstableModule);
            }
            if c.distance > off_distance && c.total_coupling() >= off_min_coupling {
                signals.push(HotspotSignal::OffMainSequence);
            }
            if signals.is_empty() {
                return None;
            }
            let score = signals.len() as f64 + c.total_coupling() as f64 / max_coupling as f64;
            Some(Hotspot {
                module: m.module.clone(),
                metrics: *c,
                zone: m.zone,
                signals,
                score,
            })
        })
        .collect();

    hotspots.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.module.cmp(&b.module))
    });

    tracing::debug!(
        hotspots = hotspots.len(),
        god_threshold,
        "hotspot classification complete"
    );
    hotspots
}
