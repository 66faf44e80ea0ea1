//! # Error Types
//!
//! Structured error types for beam_core. The engine and its equations raise
//! exactly two kinds: [`AnalysisError::InvalidCondition`] when a condition name
//! is not supported, and [`AnalysisError::PositionOutOfBounds`] when an equation
//! is evaluated off the beam. The remaining variants belong to opt-in input
//! validation and to report/settings file handling.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{AnalysisError, AnalysisResult};
//!
//! fn validate_span(span: f64) -> AnalysisResult<()> {
//!     if span <= 0.0 {
//!         return Err(AnalysisError::invalid_input(
//!             "primary_span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisError {
    /// The requested support condition is not one of the supported names
    #[error("Invalid condition: '{name}' (expected one of: simply-supported, two-span-unequal)")]
    InvalidCondition { name: String },

    /// An equation was evaluated at a position that does not lie on the beam
    #[error("Position {x} is out of bounds: valid range is [{min}, {max}]")]
    PositionOutOfBounds { x: f64, min: f64, max: f64 },

    /// An input value is invalid (only raised by explicit validation)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A material lacks a property that was explicitly required
    #[error("Material '{material}' has no '{property}' property")]
    MissingProperty { material: String, property: String },

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

    /// Report schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl AnalysisError {
    /// Create an InvalidCondition error
    pub fn invalid_condition(name: impl Into<String>) -> Self {
        AnalysisError::InvalidCondition { name: name.into() }
    }

    /// Create a PositionOutOfBounds error for the range `[min, max]`
    pub fn out_of_bounds(x: f64, min: f64, max: f64) -> Self {
        AnalysisError::PositionOutOfBounds { x, min, max }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AnalysisError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(material: impl Into<String>, property: impl Into<String>) -> Self {
        AnalysisError::MissingProperty {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AnalysisError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        AnalysisError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidCondition { .. } => "INVALID_CONDITION",
            AnalysisError::PositionOutOfBounds { .. } => "POSITION_OUT_OF_BOUNDS",
            AnalysisError::InvalidInput { .. } => "INVALID_INPUT",
            AnalysisError::MissingProperty { .. } => "MISSING_PROPERTY",
            AnalysisError::FileError { .. } => "FILE_ERROR",
            AnalysisError::SerializationError { .. } => "SERIALIZATION_ERROR",
            AnalysisError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
