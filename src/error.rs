//! Error types for rustdoctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Usage errors (unknown section, bad pattern) stop the run before any
//!   report output is written; see [`DoctorError::is_usage`]
//! - Producer errors are captured per section by the report builder and
//!   rendered inline, so they never reach `main`
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for rustdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// A section with this name is already registered.
    #[error("Section '{name}' is already registered")]
    DuplicateSection { name: String },

    /// Requested section does not exist.
    #[error("Don't understand section '{name}' (valid sections: {}, or all)", .valid.join(" "))]
    UnknownSection { name: String, valid: Vec<String> },

    /// The environment variable filter is not a valid regular expression.
    #[error("Invalid environment pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// External program could not be located or started.
    #[error("Program not found: {program}")]
    ProgramNotFound { program: String },

    /// External program ran but reported failure.
    #[error("Command failed with exit code {code:?}: {command}{}", format_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// Whether this error stems from bad user input on the command line.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::UnknownSection { .. } | Self::InvalidPattern { .. }
        )
    }
}

fn format_stderr(stderr: &str) -> String {
    match stderr.trim().lines().next() {
        Some(first) if !first.is_empty() => format!(" ({})", first),
        _ => String::new(),
    }
}

/// Result type alias for rustdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
