//! # Error Types
//!
//! Structured error types for tube_core. The calculation engine itself never
//! returns these: bad numbers and infeasible geometry are reported as data on
//! [`CalculationResult`](crate::calculations::CalculationResult). These errors
//! cover the boundary around the engine instead, such as unit and shape tags
//! that fail to parse, or a settings file that cannot be read.
//!
//! ## Example
//!
//! ```rust
//! use tube_core::errors::{CalcError, CalcResult};
//! use tube_core::units::LengthUnit;
//!
//! fn parse_unit(tag: &str) -> CalcResult<LengthUnit> {
//!     tag.parse()
//! }
//!
//! let err = parse_unit("furlong").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_UNIT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tube_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for everything outside the pure calculation.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A unit tag is not one of the accepted spellings
    #[error("Unknown unit '{unit}' (expected one of: {expected})")]
    UnknownUnit { unit: String, expected: String },

    /// A shape tag is not round, square or rectangle
    #[error("Unknown shape '{shape}' (expected one of: round, square, rectangle)")]
    UnknownShape { shape: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, expected: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            unit: unit.into(),
            expected: expected.into(),
        }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(shape: impl Into<String>) -> Self {
        CalcError::UnknownShape {
            shape: shape.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_unit("yd", "in, mm, ft, m");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_shape("hexagon").error_code(), "UNKNOWN_SHAPE");
        assert_eq!(CalcError::missing_field("side").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::file_error("open", "x.json", "denied").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::unknown_shape("oval");
        assert_eq!(
            err.to_string(),
            "Unknown shape 'oval' (expected one of: round, square, rectangle)"
        );
    }
}
