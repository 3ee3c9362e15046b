//! Architectural layer configuration.
//!
//! ```toml
//! [[layers.definitions]]
//! name = "adapters"
//! glob = "src/adapters/**"
//!
//! [layers.allowed_dependencies]
//! adapters = ["application"]
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// One named layer and the glob that selects its modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDefinition {
    pub name: String,
    pub glob: String,
}

impl LayerDefinition {
    pub fn new(name: impl Into<String>, glob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glob: glob.into(),
        }
    }
}

/// Ordered layer definitions plus the layer-to-layer allow-list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayersConfig {
    /// Layers in match order; the first matching glob wins.
    #[serde(default)]
    pub definitions: Vec<LayerDefinition>,
    /// `layer -> layers it may depend on`.
    #[serde(default)]
    pub allowed_dependencies: BTreeMap<String, Vec<String>>,
}

impl LayersConfig {
    /// Layer validation runs only when at least one layer is declared.
    pub fn is_enabled(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// Reject internally inconsistent layer configuration.
    ///
    /// Names must be non-empty and unique, globs must compile, and every
    /// key and target of `allowed_dependencies` must name a declared layer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names: FxHashSet<&str> = FxHashSet::default();
        for (i, layer) in self.definitions.iter().enumerate() {
            if layer.name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("layers.definitions[{i}].name"),
                    message: "layer name must not be empty".to_string(),
                });
            }
            if !names.insert(layer.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("layers.definitions[{i}].name"),
                    message: format!("duplicate layer name '{}'", layer.name),
                });
            }
            if let Err(e) = glob::Pattern::new(&layer.glob) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("layers.definitions[{i}].glob"),
                    message: format!("invalid glob '{}': {}", layer.glob, e),
                });
            }
        }

        for (from, targets) in &self.allowed_dependencies {
            if !names.contains(from.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("layers.allowed_dependencies.{from}"),
                    message: format!("unknown layer '{from}'"),
                });
            }
            for target in targets {
                if !names.contains(target.as_str()) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("layers.allowed_dependencies.{from}"),
                        message: format!("unknown target layer '{target}'"),
                    });
                }
            }
        }

        Ok(())
    }
}
