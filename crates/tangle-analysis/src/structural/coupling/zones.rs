//! Zone classification.

use tangle_core::constants::MAIN_SEQUENCE_THRESHOLD;

use super::types::{CouplingMetrics, ZoneClassification};

/// Place a module relative to the main sequence using its computed distance.
///
/// Modules near the line, or far from it outside both corners, stay on the
/// main sequence. Otherwise the low-I/low-A corner is the zone of pain and the
/// high-I/high-A corner the zone of uselessness.
pub fn classify_zone(metrics: &CouplingMetrics) -> ZoneClassification {
    if metrics.distance <= MAIN_SEQUENCE_THRESHOLD {
        return ZoneClassification::MainSequence;
    }
    let stable = metrics.instability < 0.5;
    let concrete = metrics.abstractness < 0.5;
    match (stable, concrete) {
        (true, true) => ZoneClassification::ZoneOfPain,
        (false, false) if metrics.instability > 0.5 && metrics.abstractness > 0.5 => {
            ZoneClassification::ZoneOfUselessness
        }
        _ => ZoneClassification::MainSequence,
    }
}
