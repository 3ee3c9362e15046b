//! Cycle engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_CYCLES_PER_SCC, DEFAULT_MAX_SEARCH_STEPS};

/// Configuration for cycle detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CyclesConfig {
    /// Maximum elementary cycles enumerated per strongly connected component. Default: 100.
    pub max_cycles_per_scc: Option<usize>,
    /// DFS step budget per component. Default: 250_000.
    pub max_search_steps: Option<usize>,
    /// Drop `import type` edges from the module graph. Default: false.
    pub ignore_type_only: Option<bool>,
}

impl CyclesConfig {
    /// Returns the effective per-component cycle cap, defaulting to 100.
    pub fn effective_max_cycles_per_scc(&self) -> usize {
        self.max_cycles_per_scc.unwrap_or(DEFAULT_MAX_CYCLES_PER_SCC)
    }

    /// Returns the effective per-component step budget, defaulting to 250_000.
    pub fn effective_max_search_steps(&self) -> usize {
        self.max_search_steps.unwrap_or(DEFAULT_MAX_SEARCH_STEPS)
    }

    /// Returns whether type-only imports are left out of the graph, defaulting to false.
    pub fn effective_ignore_type_only(&self) -> bool {
        self.ignore_type_only.unwrap_or(false)
    }
}
