//! Confirm-gated config file writes

use super::ConfigFile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// What happened to a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Prompt shown before overwriting an existing config file
pub fn overwrite_prompt(file_name: &str) -> String {
    format!("File {} already exists. Overwrite?", file_name)
}

/// Write `file` into `dir`.
///
/// A missing target is created without asking. An existing one is only
/// replaced when `confirm` returns true; otherwise it is left untouched.
pub async fn write_config<F>(dir: &Path, file: &ConfigFile, mut confirm: F) -> Result<WriteOutcome>
where
    F: FnMut(&str) -> Result<bool>,
{
    let target_path = dir.join(file.file_name);

    let outcome = if fs::try_exists(&target_path).await.unwrap_or(false) {
        if confirm(&overwrite_prompt(file.file_name))? {
            WriteOutcome::Overwritten
        } else {
            return Ok(WriteOutcome::Skipped);
        }
    } else {
        WriteOutcome::Created
    };

    fs::write(&target_path, file.render())
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

    Ok(outcome)
}
