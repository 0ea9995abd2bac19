//! The scaffold request and its namespace value object.
//!
//! A [`ScaffoldRequest`] captures one invocation of the tool: the project
//! folder name and the PHP namespace the generated skeleton is organised
//! under. Both are validated at construction and never mutated.

use crate::domain::error::DomainError;

/// A PHP namespace prefix, e.g. `Blog` or `Acme`.
///
/// The namespace drives every generated artifact: the `autoload.psr-4` key
/// in `composer.json`, the suite name in `phpspec.yml`, and the source
/// folder layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    /// Validate and wrap an explicit namespace.
    pub fn new(namespace: impl Into<String>) -> Result<Self, DomainError> {
        let namespace = namespace.into();

        if namespace.is_empty() {
            return Err(DomainError::InvalidNamespace {
                namespace,
                reason: "namespace must not be empty".into(),
            });
        }
        if namespace.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidNamespace {
                namespace,
                reason: "namespace must not contain whitespace".into(),
            });
        }
        if namespace.contains('\\') || namespace.contains('/') {
            return Err(DomainError::InvalidNamespace {
                namespace,
                reason: "namespace must be a single segment without separators".into(),
            });
        }

        Ok(Self(namespace))
    }

    /// The capitalized-name fallback: `blog` → `Blog`.
    ///
    /// Upper-cases the first character only; the rest of the name is kept
    /// verbatim. Unicode upper-casing may expand to multiple characters
    /// (e.g. `ß` → `SS`).
    pub fn from_project_name(name: &str) -> Result<Self, DomainError> {
        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => return Err(DomainError::EmptyProjectName),
        };
        Self::new(capitalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suite key for the phpspec configuration: `Blog` → `blog_suite`.
    pub fn suite_key(&self) -> String {
        format!("{}_suite", self.0.to_lowercase())
    }

    /// PSR-4 autoload key: `Blog` → `Blog\`.
    pub fn autoload_key(&self) -> String {
        format!("{}\\", self.0)
    }

    /// Source path the autoload key maps to: `Blog` → `src/Blog`.
    pub fn source_path(&self) -> String {
        format!("src/{}", self.0)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scaffolding invocation: project folder name plus effective namespace.
///
/// Created from command-line input; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: String,
    namespace: Namespace,
}

impl ScaffoldRequest {
    /// Build a request from raw CLI input.
    ///
    /// `namespace == None` triggers the capitalized-name fallback.
    pub fn new(name: impl Into<String>, namespace: Option<&str>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        let namespace = match namespace {
            Some(ns) => Namespace::new(ns)?,
            None => Namespace::from_project_name(&name)?,
        };

        Ok(Self { name, namespace })
    }

    /// The project folder name, used verbatim under the parent directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}
