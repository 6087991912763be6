//! Error types for propkit operations.
//!
//! This module defines [`PropkitError`], the error type shared by the
//! property accessors and the CLI, and a [`Result`] type alias for
//! convenience.
//!
//! # Error Handling Strategy
//!
//! - The predicates and property lookups are total and never return errors
//! - `ContractViolation` marks a caller bug and is never retried or swallowed
//! - Use `anyhow::Error` (via `PropkitError::Other`) for foreign errors

use thiserror::Error;

/// Core error type for propkit operations.
#[derive(Debug, Error)]
pub enum PropkitError {
    /// A property write supplied neither a value nor a default.
    #[error("Contract violation: no value or default supplied for property '{key}'")]
    ContractViolation { key: String },

    /// A typed lookup found a value it could not parse.
    #[error("Invalid value for property '{key}': expected {expected}, found '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A `KEY=VALUE` definition could not be parsed.
    #[error("Invalid property definition '{definition}': expected KEY=VALUE")]
    InvalidDefinition { definition: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for propkit operations.
pub type Result<T> = std::result::Result<T, PropkitError>;
