//! Export liveness configuration.

use serde::{Deserialize, Serialize};

/// Configuration for dead / test-only export detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportsConfig {
    /// Globs for public entry points whose exports are never reported.
    #[serde(default)]
    pub entry_points: Vec<String>,
    /// Extra globs classifying modules as test files, on top of the
    /// `.spec` / `.test` stem suffixes and `__tests__` directories.
    #[serde(default)]
    pub test_globs: Vec<String>,
    /// Report `default` exports. Default: true.
    pub include_default: Option<bool>,
}

impl ExportsConfig {
    /// Returns whether default exports are checked, defaulting to true.
    pub fn effective_include_default(&self) -> bool {
        self.include_default.unwrap_or(true)
    }
}
