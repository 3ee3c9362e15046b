//! Layer assignment and allowed-dependency checks.

use glob::Pattern;
use tangle_core::config::LayersConfig;
use tangle_core::errors::ConfigError;
use tangle_core::types::collections::{FxHashMap, FxHashSet};

use super::types::{LayerViolation, ViolationKind};
use crate::structural::globs::matches_module;
use crate::structural::graph::ModuleGraph;

#[derive(Debug, Clone)]
struct CompiledLayer {
    name: String,
    pattern: Pattern,
}

/// Validated, compiled layer configuration.
#[derive(Debug, Clone, Default)]
pub struct LayerRules {
    layers: Vec<CompiledLayer>,
    allowed: FxHashMap<String, FxHashSet<String>>,
}

impl LayerRules {
    /// Validate and compile. Unknown layer names and bad globs are rejected
    /// here, so validation itself cannot fail.
    pub fn from_config(config: &LayersConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut layers = Vec::with_capacity(config.definitions.len());
        for (i, def) in config.definitions.iter().enumerate() {
            let pattern = Pattern::new(&def.glob).map_err(|e| ConfigError::ValidationFailed {
                field: format!("layers.definitions[{i}].glob"),
                message: format!("invalid glob '{}': {}", def.glob, e),
            })?;
            layers.push(CompiledLayer {
                name: def.name.clone(),
                pattern,
            });
        }

        let allowed = config
            .allowed_dependencies
            .iter()
            .map(|(from, targets)| {
                let targets: FxHashSet<String> = targets.iter().cloned().collect();
                (from.clone(), targets)
            })
            .collect();

        Ok(Self { layers, allowed })
    }

    pub fn is_enabled(&self) -> bool {
        !self.layers.is_empty()
    }

    /// First layer whose glob matches the module path.
    pub fn layer_of(&self, module: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|layer| matches_module(&layer.pattern, module))
            .map(|layer| layer.name.as_str())
    }

    pub fn is_allowed(&self, from_layer: &str, to_layer: &str) -> bool {
        from_layer == to_layer
            || self
                .allowed
                .get(from_layer)
                .is_some_and(|targets| targets.contains(to_layer))
    }
}

/// Flag every collapsed edge between two different layers that the
/// allow-list does not permit. Modules without a layer are unconstrained.
pub fn validate_layers(graph: &ModuleGraph, rules: &LayerRules) -> Vec<LayerViolation> {
    if !rules.is_enabled() {
        return Vec::new();
    }

    let assignment: Vec<Option<&str>> = graph
        .modules()
        .map(|(_, module)| rules.layer_of(module))
        .collect();

    // `edges()` yields each ordered pair once, by `from` then `to`, which is
    // also sorted path order.
    let violations: Vec<LayerViolation> = graph
        .edges()
        .filter_map(|(from, to)| {
            let from_layer = assignment[from.index()]?;
            let to_layer = assignment[to.index()]?;
            if rules.is_allowed(from_layer, to_layer) {
                return None;
            }
            Some(LayerViolation {
                kind: ViolationKind::LayerViolation,
                from_layer: from_layer.to_string(),
                to_layer: to_layer.to_string(),
                from_module: graph.module_name(from).to_string(),
                to_module: graph.module_name(to).to_string(),
            })
        })
        .collect();

    tracing::debug!(violations = violations.len(), "layer validation complete");
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_core::config::LayerDefinition;

    fn config() -> LayersConfig {
        let mut config = LayersConfig {
            definitions: vec![
                LayerDefinition::new("adapters", "src/adapters/**"),
                LayerDefinition::new("application", "src/application/**"),
                LayerDefinition::new("engine", "src/engine/**"),
                LayerDefinition::new("catch_all", "src/**"),
            ],
            ..Default::default()
        };
        config
            .allowed_dependencies
            .insert("adapters".to_string(), vec!["application".to_string()]);
        config
    }

    #[test]
    fn first_matching_glob_wins() {
        let rules = LayerRules::from_config(&config()).unwrap();
        assert_eq!(rules.layer_of("src/adapters/http.ts"), Some("adapters"));
        assert_eq!(rules.layer_of("src/util.ts"), Some("catch_all"));
        assert_eq!(rules.layer_of("scripts/build.ts"), None);
    }

    #[test]
    fn single_star_does_not_shadow_nested_layers() {
        let config = LayersConfig {
            definitions: vec![
                LayerDefinition::new("root", "src/*.ts"),
                LayerDefinition::new("engine", "src/engine/**"),
            ],
            ..Default::default()
        };
        let rules = LayerRules::from_config(&config).unwrap();
        assert_eq!(rules.layer_of("src/main.ts"), Some("root"));
        assert_eq!(rules.layer_of("src/engine/core.ts"), Some("engine"));
    }

    #[test]
    fn same_layer_always_allowed() {
        let rules = LayerRules::from_config(&config()).unwrap();
        assert!(rules.is_allowed("engine", "engine"));
        assert!(rules.is_allowed("adapters", "application"));
        assert!(!rules.is_allowed("adapters", "engine"));
        assert!(!rules.is_allowed("application", "adapters"));
    }

    #[test]
    fn unknown_target_rejected() {
        let mut bad = config();
        bad.allowed_dependencies
            .insert("engine".to_string(), vec!["nowhere".to_string()]);
        assert!(LayerRules::from_config(&bad).is_err());
    }

    #[test]
    fn empty_rules_are_disabled() {
        let rules = LayerRules::from_config(&LayersConfig::default()).unwrap();
        assert!(!rules.is_enabled());
    }
}
