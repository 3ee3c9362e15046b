//! Report shaping configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FAN_TOP_N;

/// Configuration for report assembly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Entries kept in the fan-in and fan-out rankings. Default: 10.
    pub fan_top_n: Option<usize>,
}

impl ReportConfig {
    /// Returns the effective ranking length, defaulting to 10.
    pub fn effective_fan_top_n(&self) -> usize {
        self.fan_top_n.unwrap_or(DEFAULT_FAN_TOP_N)
    }
}
