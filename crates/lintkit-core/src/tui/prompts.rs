//! Charm-style CLI prompts using cliclack

use crate::config::{self, RenameOutcome, WriteOutcome};
use crate::manifest::{dependency, DevDependency, PackageJson};
use crate::preset::Preset;
use crate::runtime::{self, InstallError, PackageManager};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Project root (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Never prompt for or run the dependency install
    pub skip_install: bool,

    /// Package manager override (detected from the project otherwise)
    pub package_manager: Option<PackageManager>,
}

/// Run the setup with interactive prompts
pub async fn run<P: Preset>(preset: &P, args: SetupArgs) -> Result<()> {
    cliclack::intro(format!("{} lint setup", preset.display_name()))?;

    // Step 1: Resolve project root
    let project_dir = resolve_directory(&args)?;

    // Step 2: Rename ESLint configs that would shadow .eslintrc.js
    rename_conflicts(preset, &project_dir, &args).await?;

    // Step 3: Write config files
    for file in preset.config_files() {
        let outcome = config::write_config(&project_dir, &file, |msg| confirm(msg, &args)).await?;
        match outcome {
            WriteOutcome::Created => cliclack::log::success(format!("Created {}", file.file_name))?,
            WriteOutcome::Overwritten => {
                cliclack::log::success(format!("Overwritten {}", file.file_name))?
            }
            WriteOutcome::Skipped => cliclack::log::info(format!("Skipped {}", file.file_name))?,
        }
    }

    // Step 4: Patch package.json
    let dev_dependencies = preset.dev_dependencies();
    let package_json = update_package_json(preset, &project_dir, &dev_dependencies).await?;

    // Step 5: Install tools
    if args.skip_install {
        cliclack::log::info("Skipped installing dependencies")?;
    } else {
        let manager = args.package_manager.unwrap_or_else(|| {
            PackageManager::detect(&project_dir, package_json.get_str("packageManager"))
        });
        install_dependencies(manager, &project_dir, &dev_dependencies, &args).await?;
    }

    cliclack::outro("Done!")?;

    Ok(())
}

/// Yes/no prompt defaulting to yes; `--yes` answers without asking
fn confirm(message: &str, args: &SetupArgs) -> Result<bool> {
    if args.yes {
        return Ok(true);
    }
    let answer: bool = cliclack::confirm(message).initial_value(true).interact()?;
    Ok(answer)
}

fn resolve_directory(args: &SetupArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    if args.directory.is_some() {
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
    }

    Ok(path)
}

async fn rename_conflicts<P: Preset>(preset: &P, project_dir: &Path, args: &SetupArgs) -> Result<()> {
    let outcomes = config::resolve_conflicts(
        project_dir,
        preset.conflicting_eslint_files(),
        |msg| confirm(msg, args),
    )
    .await?;

    for outcome in outcomes {
        match outcome {
            RenameOutcome::Renamed { from, to } => {
                cliclack::log::success(format!("Renamed {} to {}", from, to))?
            }
            RenameOutcome::Skipped { file } => {
                cliclack::log::warning(format!("Skipped renaming {}", file))?
            }
        }
    }

    Ok(())
}

async fn update_package_json<P: Preset>(
    preset: &P,
    project_dir: &Path,
    dev_dependencies: &[DevDependency],
) -> Result<PackageJson> {
    let mut package_json = PackageJson::load(project_dir).await?;

    package_json.apply_scripts(preset.scripts());
    let added = package_json.add_missing_dev_dependencies(dev_dependencies);
    package_json.save().await?;

    cliclack::log::success("Updated scripts in package.json")?;
    if !added.is_empty() {
        cliclack::log::info(format!("Declared devDependencies: {}", added.join(", ")))?;
    }

    Ok(package_json)
}

async fn install_dependencies(
    manager: PackageManager,
    project_dir: &Path,
    dev_dependencies: &[DevDependency],
    args: &SetupArgs,
) -> Result<()> {
    if !confirm(&dependency::install_prompt(dev_dependencies), args)? {
        cliclack::log::info("Skipped installing dependencies")?;
        return Ok(());
    }

    let info = runtime::check_package_manager(manager, project_dir);
    if !info.available {
        cliclack::log::warning(format!(
            "{} is not installed. Run this yourself once it is: {}",
            info.name,
            manager.add_dev_command_line(dev_dependencies)
        ))?;
        return Ok(());
    }

    cliclack::log::info(format!(
        "Installing dependencies with {} ({})...",
        info.name,
        info.version.as_deref().unwrap_or("unknown")
    ))?;

    settle_install(runtime::install(manager, project_dir, dev_dependencies).await)
}

/// Report the install result. A failed install is logged, not returned, so
/// the setup still completes.
fn settle_install(result: Result<(), InstallError>) -> Result<()> {
    match result {
        Ok(()) => cliclack::log::success("Dependencies installed")?,
        Err(e) => cliclack::log::error(format!("Failed to install dependencies: {}", e))?,
    }
    Ok(())
}
