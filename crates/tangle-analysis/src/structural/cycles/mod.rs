//! Cycle engine: Tarjan SCCs, bounded elementary-cycle enumeration,
//! canonical dedup and cycle-breaking cuts.

pub mod detection;
pub mod types;

pub use detection::{detect_cycles, strongly_connected_components};
pub use types::*;
