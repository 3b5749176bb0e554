//! # Error Types
//!
//! Structured error types for joules_core. Only a handful of operations can
//! fail: the explicitly zero-checked quantum formulas, dynamic evaluation
//! through the registry, and installing the physical constants.
//!
//! ## Example
//!
//! ```rust
//! use joules_core::errors::{JoulesError, JoulesResult};
//!
//! fn reciprocal(x: f64) -> JoulesResult<f64> {
//!     if x == 0.0 {
//!         return Err(JoulesError::division_by_zero("reciprocal", x));
//!     }
//!     Ok(1.0 / x)
//! }
//!
//! assert_eq!(reciprocal(0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joules_core operations
pub type JoulesResult<T> = Result<T, JoulesError>;

/// Structured error type for formula operations.
///
/// Serializes as `{"type": "...", "details": {...}}` so callers working in
/// JSON can branch on the variant name.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum JoulesError {
    /// A divisor was exactly zero and the formula checks for it explicitly
    #[error("Division by zero in {operation}: divided by {argument}")]
    DivisionByZero { operation: String, argument: f64 },

    /// An input value is invalid (non-finite constant, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Wrong number of arguments passed to a formula by name
    #[error("Formula '{formula}' takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        formula: String,
        expected: usize,
        actual: usize,
    },

    /// No formula registered under this name
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// The process-wide constants were already installed or read
    #[error("Physical constants are already initialized")]
    ConstantsAlreadyInitialized,

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl JoulesError {
    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>, argument: f64) -> Self {
        JoulesError::DivisionByZero {
            operation: operation.into(),
            argument,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        JoulesError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ArityMismatch error
    pub fn arity_mismatch(formula: impl Into<String>, expected: usize, actual: usize) -> Self {
        JoulesError::ArityMismatch {
            formula: formula.into(),
            expected,
            actual,
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        JoulesError::UnknownFormula { name: name.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        JoulesError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if the caller can fix this by changing the input and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, JoulesError::ConstantsAlreadyInitialized)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            JoulesError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            JoulesError::InvalidInput { .. } => "INVALID_INPUT",
            JoulesError::ArityMismatch { .. } => "ARITY_MISMATCH",
            JoulesError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            JoulesError::ConstantsAlreadyInitialized => "CONSTANTS_ALREADY_INITIALIZED",
            JoulesError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for JoulesError {
    fn from(err: serde_json::Error) -> Self {
        JoulesError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = JoulesError::division_by_zero("half_life", 0.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"DivisionByZero\""));
        let roundtrip: JoulesError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(JoulesError::division_by_zero("decay_constant", 0.0).error_code(), "DIVISION_BY_ZERO");
        assert_eq!(JoulesError::arity_mismatch("pressure", 2, 1).error_code(), "ARITY_MISMATCH");
        assert_eq!(JoulesError::unknown_formula("warp_speed").error_code(), "UNKNOWN_FORMULA");
        assert_eq!(
            JoulesError::ConstantsAlreadyInitialized.error_code(),
            "CONSTANTS_ALREADY_INITIALIZED"
        );
    }

    #[test]
    fn test_display_messages() {
        let err = JoulesError::division_by_zero("half_life", 0.0);
        assert_eq!(err.to_string(), "Division by zero in half_life: divided by 0");

        let err = JoulesError::arity_mismatch("cone_volume", 2, 3);
        assert_eq!(err.to_string(), "Formula 'cone_volume' takes 2 argument(s), got 3");
    }

    #[test]
    fn test_recoverable() {
        assert!(JoulesError::unknown_formula("x").is_recoverable());
        assert!(!JoulesError::ConstantsAlreadyInitialized.is_recoverable());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: JoulesError = serde_json::from_str::<f64>("not a number").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
