//! Coupling analysis types: Martin metrics, zones, hotspots.

use serde::{Deserialize, Serialize};

/// Robert C. Martin coupling metrics for a single module.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouplingMetrics {
    /// Afferent coupling: distinct modules that import this one.
    pub fan_in: u32,
    /// Efferent coupling: distinct modules this one imports.
    pub fan_out: u32,
    /// fanOut / (fanIn + fanOut). Range [0, 1]. 1 = maximally unstable.
    pub instability: f64,
    /// Share of exported type declarations that are abstract. Range [0, 1].
    pub abstractness: f64,
    /// |A + I - 1|. Range [0, 1]. 0 = on the main sequence.
    pub distance: f64,
}

impl CouplingMetrics {
    pub fn total_coupling(&self) -> u32 {
        self.fan_in + self.fan_out
    }

    pub fn is_isolated(&self) -> bool {
        self.total_coupling() == 0
    }
}

/// Zone classification on the (I, A) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification {
    /// Stable and concrete. Hard to change.
    ZoneOfPain,
    /// Unstable and abstract. Abstractions nobody depends on.
    ZoneOfUselessness,
    /// Near the line A + I = 1.
    MainSequence,
}

impl ZoneClassification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZoneOfPain => "zone_of_pain",
            Self::ZoneOfUselessness => "zone_of_uselessness",
            Self::MainSequence => "main_sequence",
        }
    }
}

impl std::fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metrics of one module, in module order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCoupling {
    pub module: String,
    pub metrics: CouplingMetrics,
    pub zone: ZoneClassification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotspotSignal {
    GodModule,
    UnstableModule,
    OffMainSequence,
}

impl HotspotSignal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GodModule => "god-module",
            Self::UnstableModule => "unstable-module",
            Self::OffMainSequence => "off-main-sequence",
        }
    }
}

impl std::fmt::Display for HotspotSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A module carrying at least one coupling signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub module: String,
    pub metrics: CouplingMetrics,
    pub zone: ZoneClassification,
    pub signals: Vec<HotspotSignal>,
    /// `signals + totalCoupling / maxCoupling`.
    pub score: f64,
}

impl Hotspot {
    pub fn has_signal(&self, signal: HotspotSignal) -> bool {
        self.signals.contains(&signal)
    }
}
