//! Unified error types for the spec-scaffold helpers.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Feature workspace errors
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not a feature directory: {0}")]
    NotAFeatureDirectory(String),

    #[error("Invalid {field}: {value:?}")]
    InvalidComponent { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for workspace operations
pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;
