//! tangle-core: shared foundation for the Tangle module graph engine.
//!
//! - Config: TOML-based layered configuration (`tangle.toml`)
//! - Errors: one `thiserror` enum per concern with stable error codes
//! - Tracing: `TANGLE_LOG`-driven subscriber setup
//! - Types: fast collections and module-path interning
//! - Constants: defaults for every calibratable threshold

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::TangleConfig;
pub use errors::{AnalysisError, ConfigError, TangleErrorCode};
