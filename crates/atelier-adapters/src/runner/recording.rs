//! Recording command runner for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use atelier_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::AtelierResult,
};

/// One recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

type Hook = dyn Fn(&Invocation) + Send + Sync;

/// Command runner that records invocations without touching a real package
/// manager.
///
/// Every invocation succeeds with empty output unless a program is marked
/// failing (non-zero exit) or unspawnable (spawn error). Registered hooks
/// fire on each invocation, which lets a test emulate side effects of the
/// real tools - e.g. composer leaving `composer.json` behind in a shared
/// [`MemoryFilesystem`](crate::MemoryFilesystem).
///
/// Clones share state, like the memory filesystem.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    invocations: Vec<Invocation>,
    failing: HashSet<String>,
    unspawnable: HashSet<String>,
    hooks: Vec<Arc<Hook>>,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make invocations of `program` report a non-zero exit.
    pub fn fail_program(&self, program: &str) {
        self.inner.write().unwrap().failing.insert(program.into());
    }

    /// Make invocations of `program` fail to spawn entirely.
    pub fn refuse_to_spawn(&self, program: &str) {
        self.inner
            .write()
            .unwrap()
            .unspawnable
            .insert(program.into());
    }

    /// Register a side-effect hook, fired for every invocation.
    pub fn on_run(&self, hook: impl Fn(&Invocation) + Send + Sync + 'static) {
        self.inner.write().unwrap().hooks.push(Arc::new(hook));
    }

    /// All invocations recorded so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.read().unwrap().invocations.clone()
    }

    /// Whether `program` was invoked with `first_arg` as its first argument.
    pub fn invoked(&self, program: &str, first_arg: &str) -> bool {
        self.invocations()
            .iter()
            .any(|inv| inv.program == program && inv.args.first().map(String::as_str) == Some(first_arg))
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("RecordingRunner")
            .field("invocations", &inner.invocations)
            .field("failing", &inner.failing)
            .field("unspawnable", &inner.unspawnable)
            .finish_non_exhaustive()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> AtelierResult<CommandOutput> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        };

        // Record first, then fire hooks outside the lock: a hook may poke at
        // other shared state and must not observe a held write lock here.
        let hooks: Vec<Arc<Hook>> = {
            let mut inner = self.inner.write().map_err(|_| {
                atelier_core::error::AtelierError::Internal {
                    message: "recording runner lock poisoned".into(),
                }
            })?;
            inner.invocations.push(invocation.clone());
            inner.hooks.clone()
        };

        for hook in hooks {
            hook(&invocation);
        }

        let inner = self.inner.read().unwrap();
        if inner.unspawnable.contains(program) {
            return Err(ApplicationError::CommandFailed {
                command: program.to_string(),
                reason: "No such file or directory".into(),
            }
            .into());
        }

        Ok(CommandOutput {
            success: !inner.failing.contains(program),
            stdout: String::new(),
            stderr: if inner.failing.contains(program) {
                "simulated failure".into()
            } else {
                String::new()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_invocations_in_order() {
        let runner = RecordingRunner::new();
        runner.run("composer", &["require", "x"], Path::new("/p")).unwrap();
        runner.run("npm", &["install"], Path::new("/p")).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "composer");
        assert_eq!(calls[0].args, ["require", "x"]);
        assert_eq!(calls[1].program, "npm");
    }

    #[test]
    fn failing_program_reports_non_zero_exit() {
        let runner = RecordingRunner::new();
        runner.fail_program("npm");

        let output = runner.run("npm", &["install"], Path::new("/p")).unwrap();
        assert!(!output.success);
    }

    #[test]
    fn unspawnable_program_errors() {
        let runner = RecordingRunner::new();
        runner.refuse_to_spawn("composer");

        assert!(runner.run("composer", &[], Path::new("/p")).is_err());
    }

    #[test]
    fn hooks_observe_each_invocation() {
        let runner = RecordingRunner::new();
        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink = seen.clone();
        runner.on_run(move |inv| sink.write().unwrap().push(inv.program.clone()));

        runner.run("composer", &["require"], Path::new("/p")).unwrap();
        assert_eq!(*seen.read().unwrap(), ["composer"]);
    }

    #[test]
    fn clones_share_recordings() {
        let runner = RecordingRunner::new();
        let handle = runner.clone();

        runner.run("npm", &[], Path::new("/p")).unwrap();
        assert_eq!(handle.invocations().len(), 1);
    }
}
