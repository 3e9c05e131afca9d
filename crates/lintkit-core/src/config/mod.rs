//! Config file rendering, conflict handling, and writing
//!
//! This module provides:
//! - `ConfigFile` - a named, formatted config artifact
//! - Legacy ESLint config detection and `old_` renaming
//! - Confirm-gated config writes

pub mod legacy;
pub mod writer;

use serde_json::Value;

pub use legacy::{find_conflicting_configs, rename_to_old, resolve_conflicts, RenameOutcome};
pub use writer::{write_config, WriteOutcome};

/// How a config body is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// CommonJS module: `module.exports = <pretty json>`
    ModuleExports,
    /// Plain pretty-printed JSON
    Json,
    /// Verbatim text
    Text,
}

/// A single config artifact written into the project root
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// File name relative to the project root
    pub file_name: &'static str,
    pub format: FileFormat,
    body: Value,
}

impl ConfigFile {
    pub fn new(file_name: &'static str, format: FileFormat, body: Value) -> Self {
        Self {
            file_name,
            format,
            body,
        }
    }

    /// A verbatim text file (ignore files and the like)
    pub fn text(file_name: &'static str, body: impl Into<String>) -> Self {
        Self::new(file_name, FileFormat::Text, Value::String(body.into()))
    }

    /// Render the file content exactly as written to disk.
    ///
    /// JSON uses a 2-space indent and keeps declaration key order. No trailing
    /// newline is added.
    pub fn render(&self) -> String {
        match self.format {
            FileFormat::ModuleExports => format!("module.exports = {:#}", self.body),
            FileFormat::Json => format!("{:#}", self.body),
            FileFormat::Text => match &self.body {
                Value::String(text) => text.clone(),
                other => format!("{:#}", other),
            },
        }
    }
}
