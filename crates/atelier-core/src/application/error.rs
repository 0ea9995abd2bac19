//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Project already exists at target location. Raised before any
    /// filesystem mutation.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The dependency manifest could not be read or patched.
    #[error("Manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// An external command could not be spawned.
    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Could not use the manifest at: {}", path.display()),
                "The composer bootstrap step must leave a valid composer.json behind".into(),
                "Check that composer is installed and on your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure the command is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ManifestError { .. } | Self::CommandFailed { .. } => ErrorCategory::External,
        }
    }
}
