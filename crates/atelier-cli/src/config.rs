//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it (the core receives a
//! `Toolchain` built from it).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`ATELIER_COMPOSER_BIN`, `ATELIER_NPM_BIN`)
//! 3. Config file (`--config <FILE>`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use atelier_core::application::Toolchain;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External programs the scaffolder shells out to.
    pub tools: ToolsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Dependency-manager binary (installs phpspec, dumps the autoloader).
    pub composer: String,
    /// Package-manager binary (installs the gulp toolchain).
    pub npm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            composer: "composer".into(),
            npm: "npm".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config`; that file must exist and parse.  Without it, the default
    /// location is read when present and silently skipped otherwise.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => Some(explicit.clone()),
            None => {
                let default = Self::config_path();
                default.exists().then_some(default)
            }
        };

        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        config.override_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through a lookup function (injectable for
    /// tests, since mutating the process environment is unsafe in tests that
    /// run in parallel).
    fn override_from<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(composer) = get("ATELIER_COMPOSER_BIN") {
            self.tools.composer = composer;
        }
        if let Some(npm) = get("ATELIER_NPM_BIN") {
            self.tools.npm = npm;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.atelier.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "atelier", "atelier")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".atelier.toml"))
    }

    /// The external-program set the core service should use.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            composer: self.tools.composer.clone(),
            npm: self.tools.npm.clone(),
        }
    }
}
