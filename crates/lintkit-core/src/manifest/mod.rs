//! `package.json` types and patching
//!
//! This module provides:
//! - `DevDependency` - a tool name with its npm version requirement
//! - `PackageJson` - an order-preserving `package.json` document with the
//!   script and devDependency patches applied during setup

pub mod dependency;
pub mod package_json;

pub use dependency::DevDependency;
pub use package_json::{PackageJson, PackageJsonError, PACKAGE_JSON};
