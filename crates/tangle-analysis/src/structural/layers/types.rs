use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    LayerViolation,
}

/// An import edge crossing from one layer into a layer it may not depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerViolation {
    pub kind: ViolationKind,
    pub from_layer: String,
    pub to_layer: String,
    pub from_module: String,
    pub to_module: String,
}
