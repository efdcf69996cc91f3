//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - listing completed (an empty listing is still a success)
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::LoadError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Directory to list does not exist (code 3)
    NotFound = 3,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `LoadError` to the appropriate exit code.
    pub fn from_error(error: &LoadError) -> Self {
        match error {
            LoadError::DirectoryNotFound { .. } => ExitCode::NotFound,
            LoadError::NotADirectory { .. } | LoadError::FileRead { .. } => ExitCode::IoError,
            LoadError::Parse(_) => ExitCode::ParseError,
            LoadError::Config { .. } => ExitCode::ConfigError,
            LoadError::ThreadPool { .. } | LoadError::General(_) => ExitCode::GeneralError,
        }
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Not found",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
        }
    }
}
