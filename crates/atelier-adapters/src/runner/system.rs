//! Production command runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use atelier_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::AtelierResult,
};

/// Runs external commands synchronously with `std::process::Command`.
///
/// Each invocation blocks until the child exits; stdout/stderr are captured
/// rather than inherited so the CLI controls what the user sees.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system command runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> AtelierResult<CommandOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "Running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: program.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn captures_stdout_of_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();

        let output = runner.run("echo", &["hello"], dir.path()).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    #[cfg(unix)]
    fn reports_non_zero_exit_as_unsuccessful() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();

        let output = runner.run("sh", &["-c", "exit 3"], dir.path()).unwrap();
        assert!(!output.success);
    }

    #[test]
    #[cfg(unix)]
    fn runs_in_the_given_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();

        let output = runner.run("pwd", &[], dir.path()).unwrap();
        let reported = std::path::PathBuf::from(output.stdout.trim());
        // Compare canonicalized paths: tempdirs may sit behind symlinks on macOS.
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();

        let err = runner
            .run("definitely-not-a-real-binary", &[], dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-binary"));
    }
}
