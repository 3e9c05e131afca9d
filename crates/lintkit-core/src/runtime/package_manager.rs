//! Package manager selection and dev-dependency installation
//!
//! The install runs in the project root with standard I/O inherited, so the
//! package manager's own progress output goes straight to the terminal.

use crate::manifest::DevDependency;
use clap::ValueEnum;
use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Lockfiles in detection order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Binary name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "Yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "Bun",
        }
    }

    /// Parse the name part of a `packageManager` field ("yarn@3.6.4")
    pub fn from_field(field: &str) -> Option<Self> {
        let name = field.split('@').next().unwrap_or(field).trim();
        match name {
            "yarn" => Some(PackageManager::Yarn),
            "npm" => Some(PackageManager::Npm),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Pick the manager a project uses.
    ///
    /// Lockfiles win, then the `packageManager` field of `package.json`,
    /// then Yarn.
    pub fn detect(dir: &Path, package_manager_field: Option<&str>) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| dir.join(lockfile).exists())
            .map(|(_, manager)| *manager)
            .or_else(|| package_manager_field.and_then(Self::from_field))
            .unwrap_or_default()
    }

    /// Arguments that add `deps` as dev dependencies
    pub fn add_dev_args(&self, deps: &[DevDependency]) -> Vec<String> {
        let specs = deps.iter().map(DevDependency::specifier);
        match self {
            PackageManager::Yarn => std::iter::once("add".to_string())
                .chain(specs)
                .chain(std::iter::once("--dev".to_string()))
                .collect(),
            PackageManager::Npm => ["install", "--save-dev"]
                .into_iter()
                .map(String::from)
                .chain(specs)
                .collect(),
            PackageManager::Pnpm => ["add", "--save-dev"]
                .into_iter()
                .map(String::from)
                .chain(specs)
                .collect(),
            PackageManager::Bun => ["add", "--dev"]
                .into_iter()
                .map(String::from)
                .chain(specs)
                .collect(),
        }
    }

    /// Full command line shown to the user
    pub fn add_dev_command_line(&self, deps: &[DevDependency]) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.add_dev_args(deps));
        parts.join(" ")
    }

    /// Base command for this manager. On Windows the managers are `.cmd`
    /// shims, so they go through `cmd /C`.
    pub(crate) fn command(&self) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(self.program());
            cmd
        } else {
            Command::new(self.program())
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// Add `deps` as dev dependencies of the project in `dir`.
///
/// Blocks until the package manager exits. There is no timeout.
pub async fn install(
    manager: PackageManager,
    dir: &Path,
    deps: &[DevDependency],
) -> Result<(), InstallError> {
    run_add_dev(
        manager.command(),
        manager.program(),
        manager.add_dev_command_line(deps),
        manager.add_dev_args(deps),
        dir,
    )
    .await
}

/// Spawn `base` with `args` in `dir`, standard I/O inherited, and wait for it
async fn run_add_dev(
    base: Command,
    program: &'static str,
    command_line: String,
    args: Vec<String>,
    dir: &Path,
) -> Result<(), InstallError> {
    println!();
    println!("{} {}", "Running:".dimmed(), command_line.yellow());
    println!();

    let mut cmd = TokioCommand::from(base);
    cmd.args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .map_err(|source| InstallError::Spawn { program, source })?;

    let status = child
        .wait()
        .await
        .map_err(|source| InstallError::Wait { program, source })?;

    println!();
    if status.success() {
        Ok(())
    } else {
        Err(InstallError::Failed {
            command: command_line,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{Preset, ReactNativePreset};
    use tempfile::TempDir;

    #[test]
    fn test_yarn_add_dev_command() {
        let deps = ReactNativePreset.dev_dependencies();
        assert_eq!(
            PackageManager::Yarn.add_dev_command_line(&deps),
            "yarn add eslint@^8.57.0 prettier@^2.8.0 typescript@^5.4.5 \
             @react-native/eslint-config@^0.74.84 @tsconfig/react-native@^3.0.5 --dev"
        );
    }

    #[test]
    fn test_other_managers_flag_placement() {
        let deps = vec![DevDependency::new("eslint", "ESLint", "^8.57.0")];
        assert_eq!(
            PackageManager::Npm.add_dev_args(&deps),
            vec!["install", "--save-dev", "eslint@^8.57.0"]
        );
        assert_eq!(
            PackageManager::Pnpm.add_dev_args(&deps),
            vec!["add", "--save-dev", "eslint@^8.57.0"]
        );
        assert_eq!(
            PackageManager::Bun.add_dev_args(&deps),
            vec!["add", "--dev", "eslint@^8.57.0"]
        );
    }

    #[test]
    fn test_detect_defaults_to_yarn() {
        let dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(dir.path(), None), PackageManager::Yarn);
    }

    #[test]
    fn test_detect_lockfile_beats_field() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        assert_eq!(
            PackageManager::detect(dir.path(), Some("pnpm@9.1.0")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_detect_from_package_manager_field() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            PackageManager::detect(dir.path(), Some("pnpm@9.1.0")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::detect(dir.path(), Some("something@1.0.0")),
            PackageManager::Yarn
        );
    }

    #[cfg(unix)]
    fn fake_manager(dir: &Path, exit_code: i32) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-yarn");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho \"$@\" > args.txt\nexit {}\n", exit_code),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_failed_with_full_argv() {
        let bin = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let script = fake_manager(bin.path(), 3);
        let deps = ReactNativePreset.dev_dependencies();
        let manager = PackageManager::Yarn;

        let result = run_add_dev(
            Command::new(&script),
            manager.program(),
            manager.add_dev_command_line(&deps),
            manager.add_dev_args(&deps),
            project.path(),
        )
        .await;

        match result {
            Err(InstallError::Failed { command, status }) => {
                assert_eq!(command, manager.add_dev_command_line(&deps));
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        // The child ran in the project root with the add-dev argv
        let argv = std::fs::read_to_string(project.path().join("args.txt")).unwrap();
        assert_eq!(
            argv.trim_end(),
            "add eslint@^8.57.0 prettier@^2.8.0 typescript@^5.4.5 \
             @react-native/eslint-config@^0.74.84 @tsconfig/react-native@^3.0.5 --dev"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_ok() {
        let bin = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let script = fake_manager(bin.path(), 0);
        let deps = vec![DevDependency::new("eslint", "ESLint", "^8.57.0")];

        let result = run_add_dev(
            Command::new(&script),
            "yarn",
            PackageManager::Yarn.add_dev_command_line(&deps),
            PackageManager::Yarn.add_dev_args(&deps),
            project.path(),
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let project = TempDir::new().unwrap();
        let deps = vec![DevDependency::new("eslint", "ESLint", "^8.57.0")];

        let result = run_add_dev(
            Command::new(project.path().join("no-such-manager")),
            "yarn",
            PackageManager::Yarn.add_dev_command_line(&deps),
            PackageManager::Yarn.add_dev_args(&deps),
            project.path(),
        )
        .await;

        assert!(matches!(
            result,
            Err(InstallError::Spawn { program: "yarn", .. })
        ));
    }

    #[test]
    fn test_detect_bun_text_lockfile() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bun.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path(), None), PackageManager::Bun);
    }
}
