//! Implementation of the `atelier new` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call
//! the core scaffold service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use atelier_adapters::{LocalFilesystem, SystemRunner};
use atelier_core::{application::ScaffoldService, domain::ScaffoldRequest};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `atelier new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Build the scaffold request (namespace defaulting happens in the core)
/// 3. Execute scaffolding via `ScaffoldService` under the current directory
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate name before touching the core.
    validate_project_name(&args.name)?;

    // 2. Build the request.
    let request = ScaffoldRequest::new(&args.name, args.namespace.as_deref())
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        namespace = %request.namespace(),
        explicit_namespace = args.namespace.is_some(),
        "Request resolved"
    );

    // 3. Create adapters and scaffold under the current directory.
    let parent_dir = std::env::current_dir()?;
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        config.toolchain(),
    );

    output.header(&format!("Creating '{}'...", request.name()))?;
    info!(project = %request.name(), parent = %parent_dir.display(), "Scaffold started");

    service
        .scaffold(&request, &parent_dir)
        .map_err(CliError::Core)?;

    info!(project = %request.name(), "Scaffold completed");

    // 4. Success + next steps.
    output.success("All done!")?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", request.name()))?;
        output.print(&format!(
            "  # specs live under spec/, sources under src/{}",
            request.namespace()
        ))?;
        output.print("  gulp        # run the suite and watch for changes")?;
    }

    Ok(())
}

// ── Name validation ───────────────────────────────────────────────────────────

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
