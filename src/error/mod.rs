// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for prefixer.
//!
//! Errors are split by category: configuration defects are fatal for the
//! whole inference, provider errors come from the commit lister.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prefixer operations.
#[derive(Error, Debug)]
pub enum PrefixerError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit lister errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    #[error("At least one dependency is required")]
    EmptyDependencies,

    #[error("Commit prefix is {length} characters long (max: {max})")]
    PrefixTooLong { length: usize, max: usize },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors reported by a commit lister.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Repository has no commit history")]
    NoHistory,

    #[error("Repository history is in a conflicting state")]
    Conflict,

    #[error("Repository not found: {repo}")]
    NotFound { repo: String },

    #[error("Failed to list commits: {message}")]
    RequestFailed { message: String },

    #[error("Git error: {message}")]
    Git { message: String },

    #[error("Failed to decode commit list: {message}")]
    Decode { message: String },
}

impl ProviderError {
    /// Whether the error means "there is no usable history" rather than a
    /// real failure. Such errors are absorbed as an empty commit list.
    pub fn is_empty_history(&self) -> bool {
        matches!(self, ProviderError::NoHistory | ProviderError::Conflict)
    }
}

impl From<git2::Error> for ProviderError {
    fn from(err: git2::Error) -> Self {
        if err.code() == git2::ErrorCode::UnbornBranch {
            ProviderError::NoHistory
        } else {
            ProviderError::Git {
                message: err.message().to_string(),
            }
        }
    }
}

/// Result type alias for prefixer operations.
pub type Result<T> = std::result::Result<T, PrefixerError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PrefixerError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
