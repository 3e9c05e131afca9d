//! Package manager availability detection

use super::package_manager::PackageManager;
use std::path::Path;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether the package manager binary responds to `--version` when run
/// from the project root, where corepack pins apply
pub fn check_package_manager(manager: PackageManager, project_dir: &Path) -> RuntimeInfo {
    let output = manager
        .command()
        .arg("--version")
        .current_dir(project_dir)
        .output();
    runtime_info(manager.display_name(), output)
}

fn runtime_info(name: &'static str, output: std::io::Result<std::process::Output>) -> RuntimeInfo {
    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}
