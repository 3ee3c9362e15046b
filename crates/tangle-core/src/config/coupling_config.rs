//! Coupling metrics and hotspot configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GOD_MODULE_FLOOR, DEFAULT_GOD_MODULE_RATIO, DEFAULT_OFF_MAIN_SEQUENCE_DISTANCE,
    DEFAULT_OFF_MAIN_SEQUENCE_MIN_COUPLING, DEFAULT_UNSTABLE_INSTABILITY,
    DEFAULT_UNSTABLE_MIN_FAN_OUT,
};

/// Calibration constants for hotspot classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CouplingConfig {
    /// Lower bound of the god-module threshold. Default: 10.
    pub god_module_floor: Option<u32>,
    /// Share of the module count used for the god-module threshold. Default: 0.1.
    pub god_module_ratio: Option<f64>,
    /// Minimum instability for `unstable-module`. Default: 0.9.
    pub unstable_instability: Option<f64>,
    /// Fan-out must exceed this for `unstable-module`. Default: 5.
    pub unstable_min_fan_out: Option<u32>,
    /// Distance above which `off-main-sequence` fires. Default: 0.7.
    pub off_main_sequence_distance: Option<f64>,
    /// Minimum total coupling for `off-main-sequence`. Default: 1.
    pub off_main_sequence_min_coupling: Option<u32>,
}

impl CouplingConfig {
    pub fn effective_god_module_floor(&self) -> u32 {
        self.god_module_floor.unwrap_or(DEFAULT_GOD_MODULE_FLOOR)
    }

    pub fn effective_god_module_ratio(&self) -> f64 {
        self.god_module_ratio.unwrap_or(DEFAULT_GOD_MODULE_RATIO)
    }

    pub fn effective_unstable_instability(&self) -> f64 {
        self.unstable_instability
            .unwrap_or(DEFAULT_UNSTABLE_INSTABILITY)
    }

    pub fn effective_unstable_min_fan_out(&self) -> u32 {
        self.unstable_min_fan_out
            .unwrap_or(DEFAULT_UNSTABLE_MIN_FAN_OUT)
    }

    pub fn effective_off_main_sequence_distance(&self) -> f64 {
        self.off_main_sequence_distance
            .unwrap_or(DEFAULT_OFF_MAIN_SEQUENCE_DISTANCE)
    }

    pub fn effective_off_main_sequence_min_coupling(&self) -> u32 {
        self.off_main_sequence_min_coupling
            .unwrap_or(DEFAULT_OFF_MAIN_SEQUENCE_MIN_COUPLING)
    }

    /// God-module threshold for a graph of `module_count` modules:
    /// `max(floor, ceil(module_count * ratio))`.
    pub fn god_module_threshold(&self, module_count: usize) -> u32 {
        let scaled = (module_count as f64 * self.effective_god_module_ratio()).ceil() as u32;
        self.effective_god_module_floor().max(scaled)
    }
}
