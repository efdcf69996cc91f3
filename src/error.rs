//! Error types for signature listing
//!
//! The signature core is total and never fails. These errors belong to the
//! layers around it: reading the directory, parsing Go sources and loading
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning Go source text into the syntax model
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("{path}:{line}:{column}: syntax error near '{snippet}'")]
    SyntaxError {
        path: PathBuf,
        line: usize,
        column: usize,
        snippet: String,
    },

    #[error("{path}: expected 'package' clause")]
    MissingPackage { path: PathBuf },

    #[error("{path}: tree-sitter produced no syntax tree")]
    NoTree { path: PathBuf },

    #[error("Invalid UTF-8 in source file '{path}'")]
    InvalidUtf8 { path: PathBuf },
}

/// Main error type for loading a directory of Go packages
#[derive(Error, Debug)]
pub enum LoadError {
    /// File system errors
    #[error("Directory '{path}' does not exist")]
    DirectoryNotFound { path: PathBuf },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Failed to build worker pool: {reason}")]
    ThreadPool { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl LoadError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
            Self::NotADirectory { .. } => "NOT_A_DIRECTORY",
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::ThreadPool { .. } => "THREAD_POOL_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::DirectoryNotFound { .. } | Self::NotADirectory { .. } => vec![
                "Pass the directory that contains the .go files",
                "Run without arguments to list the current directory",
            ],
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::Parse(ParseError::SyntaxError { .. }) => vec![
                "Fix the syntax error, or check it with 'go vet'",
                "Use --no-tests if the error is in a _test.go file",
            ],
            Self::Parse(ParseError::MissingPackage { .. }) => {
                vec!["Every Go source file must start with a package clause"]
            }
            Self::Config { .. } => vec![
                "Check .gosig/settings.toml for typos",
                "Unset GOSIG_* environment variables to fall back to defaults",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;
