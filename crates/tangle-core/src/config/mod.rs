//! Configuration system for Tangle.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod coupling_config;
pub mod cycles_config;
pub mod exports_config;
pub mod layers_config;
pub mod report_config;
pub mod tangle_config;

pub use coupling_config::CouplingConfig;
pub use cycles_config::CyclesConfig;
pub use exports_config::ExportsConfig;
pub use layers_config::{LayerDefinition, LayersConfig};
pub use report_config::ReportConfig;
pub use tangle_config::{CliOverrides, TangleConfig};
