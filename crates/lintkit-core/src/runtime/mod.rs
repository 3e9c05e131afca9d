//! Package manager detection and invocation
//!
//! This module provides:
//! - Package manager selection (lockfile, `packageManager` field, default)
//! - Availability probing for the selected manager
//! - Dev-dependency installation with inherited standard I/O

pub mod check;
pub mod package_manager;

pub use check::{check_package_manager, RuntimeInfo};
pub use package_manager::{install, InstallError, PackageManager};
