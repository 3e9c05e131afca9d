//! Lintkit Core - Shared library for lint/format configuration scaffolding
//!
//! This library provides the core functionality for dropping a fixed set of
//! ESLint, Prettier and TypeScript configuration files into a JavaScript
//! project, patching its `package.json`, and installing the matching tools.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Rendering, conflict detection, config writes,
//!   manifest patching, package manager detection and invocation
//! - **Layer 2: Presets** - The `Preset` trait describing what a stack needs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use lintkit_core::{config, manifest::PackageJson, Preset, ReactNativePreset};
//!
//! let preset = ReactNativePreset;
//! for file in preset.config_files() {
//!     config::write_config(dir, &file, |_| Ok(true)).await?;
//! }
//!
//! let mut package_json = PackageJson::load(dir).await?;
//! package_json.apply_scripts(preset.scripts());
//! package_json.add_missing_dev_dependencies(&preset.dev_dependencies());
//! package_json.save().await?;
//! ```

pub mod config;
pub mod manifest;
pub mod preset;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ConfigFile, FileFormat, RenameOutcome, WriteOutcome};
pub use manifest::{DevDependency, PackageJson, PackageJsonError};
pub use preset::{Preset, ReactNativePreset};
pub use runtime::{InstallError, PackageManager, RuntimeInfo};

#[cfg(feature = "tui")]
pub use tui::{run, SetupArgs};
