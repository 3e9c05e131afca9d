//! Detection and renaming of ESLint configs that would shadow `.eslintrc.js`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Prefix given to renamed legacy configs
pub const OLD_PREFIX: &str = "old_";

/// What happened to a conflicting config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    Skipped { file: String },
}

/// Prompt shown before renaming a conflicting config file
pub fn rename_prompt(file_name: &str) -> String {
    format!(
        "File {name} already exists. This package uses .eslintrc.js. Do you want to rename your \
         file to {prefix}{name} and use our config file? If you don't agree eslint might not work \
         properly.",
        name = file_name,
        prefix = OLD_PREFIX
    )
}

/// Return the candidates that exist in `dir`, in candidate order
pub async fn find_conflicting_configs(dir: &Path, candidates: &[&str]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for name in candidates {
        let path = dir.join(name);
        if fs::try_exists(&path).await.unwrap_or(false) {
            found.push(path);
        }
    }
    found
}

/// Rename `<dir>/<name>` to `<dir>/old_<name>`, returning the new path.
///
/// An existing `old_<name>` is replaced.
pub async fn rename_to_old(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?
        .to_string_lossy();
    let new_path = path.with_file_name(format!("{}{}", OLD_PREFIX, file_name));

    fs::rename(path, &new_path).await.with_context(|| {
        format!(
            "Failed to rename {} to {}",
            path.display(),
            new_path.display()
        )
    })?;

    Ok(new_path)
}

/// Ask about each conflicting config in `dir` and rename the accepted ones
pub async fn resolve_conflicts<F>(
    dir: &Path,
    candidates: &[&str],
    mut confirm: F,
) -> Result<Vec<RenameOutcome>>
where
    F: FnMut(&str) -> Result<bool>,
{
    let mut outcomes = Vec::new();

    for path in find_conflicting_configs(dir, candidates).await {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if confirm(&rename_prompt(&file))? {
            let new_path = rename_to_old(&path).await?;
            let to = new_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            outcomes.push(RenameOutcome::Renamed { from: file, to });
        } else {
            outcomes.push(RenameOutcome::Skipped { file });
        }
    }

    Ok(outcomes)
}
