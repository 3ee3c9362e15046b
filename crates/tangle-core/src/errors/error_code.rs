//! TangleErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable error code string
/// that report formatters and editor adapters can match on.
pub trait TangleErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LAYER_CONFIG_ERROR: &str = "LAYER_CONFIG_ERROR";
pub const INVALID_GLOB: &str = "INVALID_GLOB";
