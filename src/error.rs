//! Error types for multicheck operations.
//!
//! This module defines [`MulticheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MulticheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MulticheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for multicheck operations.
#[derive(Debug, Error)]
pub enum MulticheckError {
    /// Declaration file not found at expected location.
    #[error("Declaration file not found: {path}")]
    DeclarationsNotFound { path: PathBuf },

    /// Failed to parse a declaration file.
    #[error("Failed to parse declarations at {path}: {message}")]
    DeclarationParseError { path: PathBuf, message: String },

    /// Invalid declaration structure or values.
    #[error("Invalid declaration: {message}")]
    DeclarationInvalid { message: String },

    /// A dependency expression could not be tokenized.
    #[error("Invalid dependency expression '{expression}': {message}")]
    ExpressionError {
        expression: String,
        message: String,
    },

    /// A mandatory check failed during a run.
    #[error("Mandatory check '{check}' failed")]
    MandatoryCheckFailed { check: String },

    /// The runner rejected or aborted an invocation batch.
    #[error("Check runner failed: {message}")]
    RunnerError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for multicheck operations.
pub type Result<T> = std::result::Result<T, MulticheckError>;
