//! Integration tests for atelier-cli.
//!
//! The happy-path tests substitute fake `composer`/`npm` scripts through the
//! `[tools]` config section, so a full scaffold runs without any real
//! package manager installed.  Script-based fakes are unix-only.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Fake composer: `require` drops a minimal manifest into the cwd, every
/// other subcommand just succeeds.
#[cfg(unix)]
const FAKE_COMPOSER: &str = r#"#!/bin/sh
if [ "$1" = "require" ]; then
  printf '{\n  "require-dev": {\n    "phpspec/phpspec": "~2.0"\n  }\n}\n' > composer.json
fi
exit 0
"#;

#[cfg(unix)]
const FAKE_NPM: &str = "#!/bin/sh\nexit 0\n";

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, body).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

/// Install fake tools into `<temp>/bin`.
#[cfg(unix)]
fn install_fake_tools(temp: &TempDir) -> PathBuf {
    let bin = temp.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    write_script(&bin.join("composer"), FAKE_COMPOSER);
    write_script(&bin.join("npm"), FAKE_NPM);
    bin
}

/// Install fake tools and return a config file pointing at them.
#[cfg(unix)]
fn fake_toolchain(temp: &TempDir) -> PathBuf {
    let bin = install_fake_tools(temp);

    let config_path = temp.path().join("atelier.toml");
    std::fs::write(
        &config_path,
        format!(
            "[tools]\ncomposer = \"{}\"\nnpm = \"{}\"\n",
            bin.join("composer").display(),
            bin.join("npm").display()
        ),
    )
    .unwrap();
    config_path
}

fn atelier() -> Command {
    Command::cargo_bin("atelier").unwrap()
}

#[test]
fn test_help_flag() {
    atelier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    atelier()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    atelier()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ns"))
        .stdout(predicate::str::contains("NAME"));
}

#[test]
#[cfg(unix)]
fn test_new_project_success() {
    let temp = TempDir::new().unwrap();
    let config = fake_toolchain(&temp);

    atelier()
        .current_dir(temp.path())
        .args(["--config", config.to_str().unwrap(), "new", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All done!"));

    let project = temp.path().join("blog");
    assert!(project.exists());
    assert!(project.join("src").exists());
    assert!(project.join("phpspec.yml").exists());
    assert!(project.join("Gulpfile.js").exists());
    assert!(project.join("package.json").exists());

    // Namespace defaulted to the capitalized name.
    let manifest = std::fs::read_to_string(project.join("composer.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(doc["autoload"]["psr-4"]["Blog\\"], "src/Blog");

    let suite = std::fs::read_to_string(project.join("phpspec.yml")).unwrap();
    assert!(suite.contains("blog_suite:"));
    assert!(suite.contains("namespace: Blog"));
}

#[test]
#[cfg(unix)]
fn test_new_project_namespace_override() {
    let temp = TempDir::new().unwrap();
    let config = fake_toolchain(&temp);

    atelier()
        .current_dir(temp.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "new",
            "blog",
            "--ns",
            "Content",
        ])
        .assert()
        .success();

    let manifest = std::fs::read_to_string(temp.path().join("blog/composer.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(doc["autoload"]["psr-4"]["Content\\"], "src/Content");

    let suite = std::fs::read_to_string(temp.path().join("blog/phpspec.yml")).unwrap();
    assert!(suite.contains("content_suite:"));
    assert!(suite.contains("psr4_prefix: Content"));
}

#[test]
#[cfg(unix)]
fn test_tools_overridable_via_environment() {
    let temp = TempDir::new().unwrap();
    // No config file: the environment points at the scripts.
    let bin = install_fake_tools(&temp);

    atelier()
        .current_dir(temp.path())
        .env("ATELIER_COMPOSER_BIN", bin.join("composer"))
        .env("ATELIER_NPM_BIN", bin.join("npm"))
        .args(["new", "widgets"])
        .assert()
        .success();

    assert!(temp.path().join("widgets/composer.json").exists());
}

#[test]
fn test_new_project_already_exists() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("existing-project")).unwrap();

    atelier()
        .current_dir(temp.path())
        .args(["new", "existing-project"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    // No partial scaffold was left behind.
    assert!(!temp.path().join("existing-project/src").exists());
    assert!(!temp.path().join("existing-project/phpspec.yml").exists());
}

#[test]
#[cfg(unix)]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    let config = fake_toolchain(&temp);

    atelier()
        .current_dir(temp.path())
        .args(["-q", "--config", config.to_str().unwrap(), "new", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[cfg(unix)]
fn test_generated_files_are_deterministic() {
    let run = || {
        let temp = TempDir::new().unwrap();
        let config = fake_toolchain(&temp);
        atelier()
            .current_dir(temp.path())
            .args(["--config", config.to_str().unwrap(), "new", "blog"])
            .assert()
            .success();
        (
            std::fs::read(temp.path().join("blog/phpspec.yml")).unwrap(),
            std::fs::read(temp.path().join("blog/Gulpfile.js")).unwrap(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn test_shell_completions() {
    atelier()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
