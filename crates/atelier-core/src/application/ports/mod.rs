//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `atelier-adapters` crate provides implementations.

use std::path::Path;

use crate::error::AtelierResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `atelier_adapters::filesystem::LocalFilesystem` (production)
/// - `atelier_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AtelierResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> AtelierResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> AtelierResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Captured result of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external commands (composer, npm).
///
/// `Err` means the process could not be spawned at all (binary missing,
/// permission denied); `Ok` with `success == false` means it ran and exited
/// non-zero. The caller decides per step whether either case aborts the
/// workflow.
///
/// Implemented by:
/// - `atelier_adapters::runner::SystemRunner` (production)
/// - `atelier_adapters::runner::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, with `cwd` as the working directory, and
    /// block until it exits.
    fn run<'a>(&self, program: &str, args: &[&'a str], cwd: &Path) -> AtelierResult<CommandOutput>;
}
