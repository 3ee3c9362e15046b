//! Cycle engine types.

use serde::{Deserialize, Serialize};
use tangle_core::config::CyclesConfig;

/// Cycle severity, by the number of modules on the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleSeverity {
    Info,
    Warning,
    Critical,
}

impl CycleSeverity {
    pub fn for_length(len: usize) -> Self {
        match len {
            0..=2 => Self::Info,
            3..=4 => Self::Warning,
            _ => Self::Critical,
        }
    }
}

/// A closed import path. `path[0]` is the lexicographically smallest module
/// and each module imports the next; the last imports the first. A single
/// entry is a self-import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub path: Vec<String>,
    pub severity: CycleSeverity,
}

impl Cycle {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn is_self_import(&self) -> bool {
        self.path.len() == 1
    }

    /// Rotation- and direction-insensitive identity: sorted module set.
    pub fn canonical_key(&self) -> String {
        canonical_key(self.path.iter().map(String::as_str))
    }
}

/// Sorted module names joined with NUL.
pub fn canonical_key<'a, I>(modules: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&str> = modules.into_iter().collect();
    names.sort_unstable();
    names.join("\u{0}")
}

/// An edge on the most reported cycles of its component; removing it breaks
/// `cycles_broken` of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleCut {
    pub from: String,
    pub to: String,
    pub cycles_broken: usize,
    /// Every reported cycle of the edge's component runs through it.
    pub breaks_all: bool,
}

/// Output of the cycle engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleAnalysis {
    pub cycles: Vec<Cycle>,
    pub cuts: Vec<CycleCut>,
    /// Strongly connected components containing at least one cycle.
    pub cyclic_components: usize,
    /// Components whose enumeration hit the cycle cap or the step budget.
    pub truncated_components: usize,
}

/// Bounds applied to enumeration inside one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLimits {
    pub max_cycles_per_scc: usize,
    pub max_search_steps: usize,
}

impl CycleLimits {
    pub fn from_config(config: &CyclesConfig) -> Self {
        Self {
            max_cycles_per_scc: config.effective_max_cycles_per_scc(),
            max_search_steps: config.effective_max_search_steps(),
        }
    }
}

impl Default for CycleLimits {
    fn default() -> Self {
        Self::from_config(&CyclesConfig::default())
    }
}
