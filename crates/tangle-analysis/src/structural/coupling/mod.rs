//! Coupling analysis: Robert C. Martin metrics, zone classification and
//! hotspot ranking.
//!
//! Computes Ca (fan-in), Ce (fan-out), I (instability), A (abstractness) and
//! D (distance from the main sequence) per module, then flags modules that
//! are too central, too unstable, or too far off the main sequence.

pub mod hotspots;
pub mod martin_metrics;
pub mod types;
pub mod zones;

pub use hotspots::classify_hotspots;
pub use martin_metrics::{compute_coupling_metrics, metrics_for};
pub use types::*;
pub use zones::classify_zone;
