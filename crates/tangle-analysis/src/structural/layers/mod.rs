//! Architectural layer validation.

pub mod types;
pub mod validator;

pub use types::{LayerViolation, ViolationKind};
pub use validator::{validate_layers, LayerRules};
