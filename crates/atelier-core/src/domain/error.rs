use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping at higher layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("manifest is not valid JSON: {reason}")]
    MalformedManifest { reason: String },

    #[error("manifest field '{field}' is not an object")]
    ManifestFieldNotObject { field: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Pass a project name: atelier new <name>".into(),
            ],
            Self::InvalidNamespace { reason, .. } => vec![
                format!("Namespace rejected: {}", reason),
                "Use a PHP-style identifier, e.g. Blog or Acme".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "composer.json could not be parsed".into(),
                "Check that the composer bootstrap step produced valid JSON".into(),
            ],
            Self::ManifestFieldNotObject { field } => vec![
                format!("composer.json has a non-object '{}' entry", field),
                "Remove or fix the conflicting entry and re-run".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName | Self::InvalidNamespace { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } | Self::ManifestFieldNotObject { .. } => {
                ErrorCategory::Manifest
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
}
