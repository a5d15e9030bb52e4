//! Error types for deployenv operations.
//!
//! This module defines [`DeployEnvError`], the error type returned by every
//! fallible registry operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registry operations return `DeployEnvError` and never recover internally
//! - Use `anyhow::Error` (via `DeployEnvError::Other`) for unexpected errors
//! - Messages name the offending input so callers can surface them directly

use thiserror::Error;

use crate::environment::Environment;

/// Core error type for deployenv operations.
#[derive(Debug, Error)]
pub enum DeployEnvError {
    /// A required argument was absent.
    #[error("{argument} is absent")]
    NullInput { argument: &'static str },

    /// Alias does not match `[a-zA-Z0-9]+(-[a-zA-Z0-9]+)*`.
    #[error("alias '{alias}' doesn't match {pattern}", pattern = crate::environment::ALIAS_PATTERN)]
    InvalidFormat { alias: String },

    /// No canonical name or alias matched the input.
    #[error("no environment matches '{input}'")]
    NoMatch { input: String },

    /// The alias would also match a different environment.
    #[error("alias '{alias}' is already mapped to {existing}")]
    AliasConflict {
        alias: String,
        existing: Environment,
    },

    /// Command-line alias registration not in `ENV=ALIAS` form.
    #[error("invalid alias registration '{spec}': expected ENV=ALIAS")]
    InvalidAliasSpec { spec: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for deployenv operations.
pub type Result<T> = std::result::Result<T, DeployEnvError>;
