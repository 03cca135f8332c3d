//! Error types for Lapr
//!
//! Centralized error handling using thiserror. The timer engine itself is
//! total over its inputs; these errors come from the plumbing around it.

use thiserror::Error;

/// All error types that can occur in Lapr
#[derive(Debug, Error)]
pub enum LaprError {
    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Registering an OS signal listener failed
    #[error("Signal error: {0}")]
    Signal(String),

    /// A spawned task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tokio::task::JoinError> for LaprError {
    fn from(err: tokio::task::JoinError) -> Self {
        LaprError::Task(err.to_string())
    }
}

/// Result type alias for Lapr operations
pub type Result<T> = std::result::Result<T, LaprError>;
