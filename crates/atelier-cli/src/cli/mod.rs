//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "atelier",
    bin_name = "atelier",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ed} PHP project scaffolding",
    long_about = "Atelier scaffolds a spec-driven PHP project: composer \
                  manifest with PSR-4 autoloading, a phpspec suite, and a \
                  gulp test watcher.",
    after_help = "EXAMPLES:\n\
        \x20 atelier new blog\n\
        \x20 atelier new blog --ns Content\n\
        \x20 atelier completions bash > /usr/share/bash-completion/completions/atelier",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new PHP project.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new PHP project",
        after_help = "EXAMPLES:\n\
            \x20 atelier new blog              # namespace defaults to Blog\n\
            \x20 atelier new blog --ns Content # explicit namespace\n\
            \x20 atelier new widgets -s Widgets"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 atelier completions bash > ~/.local/share/bash-completion/completions/atelier\n\
            \x20 atelier completions zsh  > ~/.zfunc/_atelier\n\
            \x20 atelier completions fish > ~/.config/fish/completions/atelier.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `atelier new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project folder name, created under the current directory.
    #[arg(value_name = "NAME", help = "Project folder's name")]
    pub name: String,

    /// Namespace for the project.  Defaults to the capitalized project name.
    #[arg(
        short = 's',
        long = "ns",
        value_name = "NAMESPACE",
        help = "Namespace for project"
    )]
    pub namespace: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `atelier completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
