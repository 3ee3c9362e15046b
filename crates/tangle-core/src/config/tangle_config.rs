//! Top-level Tangle configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CouplingConfig, CyclesConfig, ExportsConfig, LayersConfig, ReportConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TANGLE_*`)
/// 3. Project config (`tangle.toml` in project root)
/// 4. User config (`~/.tangle/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TangleConfig {
    pub cycles: CyclesConfig,
    pub coupling: CouplingConfig,
    pub exports: ExportsConfig,
    pub layers: LayersConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_cycles_per_scc: Option<usize>,
    pub ignore_type_only: Option<bool>,
    pub off_main_sequence_distance: Option<f64>,
    pub fan_top_n: Option<usize>,
}

impl TangleConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate value ranges and layer consistency.
    pub fn validate(config: &TangleConfig) -> Result<(), ConfigError> {
        if config.cycles.max_cycles_per_scc == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cycles.max_cycles_per_scc".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.cycles.max_search_steps == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cycles.max_search_steps".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("coupling.god_module_ratio", config.coupling.god_module_ratio),
            ("coupling.unstable_instability", config.coupling.unstable_instability),
            (
                "coupling.off_main_sequence_distance",
                config.coupling.off_main_sequence_distance,
            ),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        for (i, pattern) in config
            .exports
            .entry_points
            .iter()
            .chain(config.exports.test_globs.iter())
            .enumerate()
        {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(ConfigError::InvalidValue {
                    field: format!("exports[{i}]"),
                    message: format!("invalid glob '{pattern}': {e}"),
                });
            }
        }
        config.layers.validate()
    }

    /// Returns the user config path: `~/.tangle/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TangleConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TangleConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TangleConfig, other: &TangleConfig) {
        // Cycles
        if other.cycles.max_cycles_per_scc.is_some() {
            base.cycles.max_cycles_per_scc = other.cycles.max_cycles_per_scc;
        }
        if other.cycles.max_search_steps.is_some() {
            base.cycles.max_search_steps = other.cycles.max_search_steps;
        }
        if other.cycles.ignore_type_only.is_some() {
            base.cycles.ignore_type_only = other.cycles.ignore_type_only;
        }

        // Coupling
        if other.coupling.god_module_floor.is_some() {
            base.coupling.god_module_floor = other.coupling.god_module_floor;
        }
        if other.coupling.god_module_ratio.is_some() {
            base.coupling.god_module_ratio = other.coupling.god_module_ratio;
        }
        if other.coupling.unstable_instability.is_some() {
            base.coupling.unstable_instability = other.coupling.unstable_instability;
        }
        if other.coupling.unstable_min_fan_out.is_some() {
            base.coupling.unstable_min_fan_out = other.coupling.unstable_min_fan_out;
        }
        if other.coupling.off_main_sequence_distance.is_some() {
            base.coupling.off_main_sequence_distance =
                other.coupling.off_main_sequence_distance;
        }
        if other.coupling.off_main_sequence_min_coupling.is_some() {
            base.coupling.off_main_sequence_min_coupling =
                other.coupling.off_main_sequence_min_coupling;
        }

        // Exports
        if !other.exports.entry_points.is_empty() {
            base.exports.entry_points = other.exports.entry_points.clone();
        }
        if !other.exports.test_globs.is_empty() {
            base.exports.test_globs = other.exports.test_globs.clone();
        }
        if other.exports.include_default.is_some() {
            base.exports.include_default = other.exports.include_default;
        }

        // Layers are replaced as a unit: mixing definitions from two files
        // would silently change first-match order.
        if other.layers.is_enabled() {
            base.layers = other.layers.clone();
        }

        // Report
        if other.report.fan_top_n.is_some() {
            base.report.fan_top_n = other.report.fan_top_n;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TANGLE_CYCLES_MAX_PER_SCC`, `TANGLE_REPORT_FAN_TOP_N`, etc.
    fn apply_env_overrides(config: &mut TangleConfig) {
        if let Ok(val) = std::env::var("TANGLE_CYCLES_MAX_PER_SCC") {
            if let Ok(v) = val.parse::<usize>() {
                config.cycles.max_cycles_per_scc = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TANGLE_CYCLES_MAX_SEARCH_STEPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.cycles.max_search_steps = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TANGLE_CYCLES_IGNORE_TYPE_ONLY") {
            if let Ok(v) = val.parse::<bool>() {
                config.cycles.ignore_type_only = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TANGLE_COUPLING_OFF_MAIN_SEQUENCE_DISTANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.coupling.off_main_sequence_distance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TANGLE_REPORT_FAN_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.fan_top_n = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TangleConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_cycles_per_scc {
            config.cycles.max_cycles_per_scc = Some(v);
        }
        if let Some(v) = cli.ignore_type_only {
            config.cycles.ignore_type_only = Some(v);
        }
        if let Some(v) = cli.off_main_sequence_distance {
            config.coupling.off_main_sequence_distance = Some(v);
        }
        if let Some(v) = cli.fan_top_n {
            config.report.fan_top_n = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level tangle config directory: `~/.tangle/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".tangle"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
