//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow as a fixed
//! sequence of filesystem writes and external command invocations:
//!
//! 1. Existence check (aborts before any mutation)
//! 2. Project directory creation
//! 3. phpspec bootstrap via composer (best-effort)
//! 4. Source folder creation
//! 5. Namespace registration in the manifest + autoload refresh
//! 6. phpspec suite configuration
//! 7. Gulp build script
//! 8. Package descriptor + build-tool install (best-effort)
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). Each step is a named method; the abort/continue policy on
//! failure is explicit per step.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{
        Namespace, ScaffoldRequest, manifest,
        templates::{self, GULPFILE, PACKAGE_STUB},
    },
    error::AtelierResult,
};

/// The testing dependency installed into every new project.
const SPEC_FRAMEWORK_PACKAGE: &str = "phpspec/phpspec:~2.0";

/// Build-tool packages installed as development dependencies.
const BUILD_TOOL_PACKAGES: [&str; 4] = ["gulp", "gulp-notify", "gulp-phpspec", "gulp-run"];

/// External programs the scaffolder shells out to.
///
/// Overridable so tests (and unusual installs) can point at different
/// binaries; the invocations themselves are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// The dependency-manager CLI (installs phpspec, regenerates autoload).
    pub composer: String,
    /// The package-manager CLI (installs the gulp toolchain).
    pub npm: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            composer: "composer".into(),
            npm: "npm".into(),
        }
    }
}

/// Main scaffolding service.
///
/// Orchestrates the directory creation, package-manager invocations, and
/// template writes that make up one scaffold.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    tools: Toolchain,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        tools: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            tools,
        }
    }

    /// Scaffold a new project under `parent_dir`.
    ///
    /// This is the main use case - runs the eight steps in order. The only
    /// recoverable, user-visible failure is the up-front existence check;
    /// package-manager invocations are best-effort (logged, not fatal),
    /// while filesystem writes and the manifest patch abort on failure.
    #[instrument(
        skip_all,
        fields(
            project = %request.name(),
            namespace = %request.namespace(),
            parent_dir = %parent_dir.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest, parent_dir: &Path) -> AtelierResult<()> {
        let project_dir = parent_dir.join(request.name());

        // 1. Existence check - terminates before any mutation.
        self.ensure_target_free(&project_dir)?;

        // 2. Project directory.
        info!(path = %project_dir.display(), "Creating project directory");
        self.filesystem.create_dir_all(&project_dir)?;

        // 3. phpspec bootstrap. Leaves composer.json behind on success.
        self.install_spec_framework(&project_dir);

        // 4. Source folder.
        self.filesystem
            .create_dir_all(&project_dir.join(templates::SOURCE_DIR))?;

        // 5. Namespace registration.
        self.register_namespace(&project_dir, request.namespace())?;

        // 6. phpspec suite configuration.
        info!("Writing phpspec configuration");
        self.filesystem.write_file(
            &project_dir.join(templates::PHPSPEC_FILE),
            &templates::phpspec_config(request.namespace()),
        )?;

        // 7. Gulp build script.
        info!("Writing build script");
        self.filesystem
            .write_file(&project_dir.join(templates::GULPFILE_FILE), GULPFILE)?;

        // 8. Package descriptor + build tools.
        self.install_build_tools(&project_dir)?;

        info!("Scaffold completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Step 1: fail fast if the target directory is already occupied.
    fn ensure_target_free(&self, project_dir: &Path) -> AtelierResult<()> {
        if self.filesystem.exists(project_dir) {
            return Err(ApplicationError::ProjectExists {
                path: project_dir.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Step 3: install the spec framework via composer.
    ///
    /// Best-effort: a missing composer binary or a failed install is logged
    /// and scaffolding continues. Step 5 will surface the consequence (a
    /// missing manifest) with an actionable error.
    fn install_spec_framework(&self, project_dir: &Path) {
        info!(package = SPEC_FRAMEWORK_PACKAGE, "Installing phpspec");
        self.run_lenient(
            &self.tools.composer,
            &["require", SPEC_FRAMEWORK_PACKAGE],
            project_dir,
        );
    }

    /// Step 5: patch the manifest with the PSR-4 autoload mapping, then ask
    /// composer to regenerate the autoload index.
    ///
    /// The manifest read and patch abort on failure - every later artifact
    /// depends on the mapping being in place. The autoload refresh itself
    /// stays best-effort.
    fn register_namespace(&self, project_dir: &Path, namespace: &Namespace) -> AtelierResult<()> {
        info!(namespace = %namespace, "Registering autoload namespace");

        let manifest_path = project_dir.join(manifest::MANIFEST_FILE);
        let raw = self.filesystem.read_to_string(&manifest_path).map_err(|e| {
            ApplicationError::ManifestError {
                path: manifest_path.clone(),
                reason: format!("could not read manifest: {e}"),
            }
        })?;

        let patched = manifest::register_autoload(&raw, namespace)?;
        self.filesystem.write_file(&manifest_path, &patched)?;

        self.run_lenient(&self.tools.composer, &["dump-autoload"], project_dir);
        Ok(())
    }

    /// Step 8: write the package descriptor, then install the gulp toolchain
    /// as development dependencies.
    ///
    /// The descriptor write aborts on failure; the npm invocation is
    /// best-effort.
    fn install_build_tools(&self, project_dir: &Path) -> AtelierResult<()> {
        info!("Installing build-tool packages");
        self.filesystem
            .write_file(&project_dir.join(templates::PACKAGE_FILE), PACKAGE_STUB)?;

        let mut args = vec!["install"];
        args.extend(BUILD_TOOL_PACKAGES);
        args.push("--save-dev");
        self.run_lenient(&self.tools.npm, &args, project_dir);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run an external command, tolerating failure.
    ///
    /// Spawn failures and non-zero exits are logged at WARN; the scaffold
    /// continues either way.
    fn run_lenient(&self, program: &str, args: &[&str], cwd: &Path) {
        match self.runner.run(program, args, cwd) {
            Ok(output) if output.success => {}
            Ok(output) => {
                warn!(
                    command = %format_command(program, args),
                    stderr = %output.stderr.trim(),
                    "External command exited non-zero, continuing"
                );
            }
            Err(e) => {
                warn!(
                    command = %format_command(program, args),
                    error = %e,
                    "External command could not be run, continuing"
                );
            }
        }
    }
}

/// Render a program + args for log output.
fn format_command(program: &str, args: &[&str]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
