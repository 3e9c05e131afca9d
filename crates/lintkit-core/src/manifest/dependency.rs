//! Tool dependency with an npm-style version requirement

use semver::{BuildMetadata, Version, VersionReq};

/// A tool declared under `devDependencies` and passed to the package manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevDependency {
    /// npm package name (e.g. "@tsconfig/react-native")
    pub name: String,
    /// Label used in the install prompt (e.g. "ESLint")
    pub label: String,
    /// Version requirement as written to `package.json` (e.g. "^8.57.0")
    pub requirement: String,
}

impl DevDependency {
    pub fn new(name: &str, label: &str, requirement: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            requirement: requirement.to_string(),
        }
    }

    /// `name@requirement`, as passed to the package manager
    pub fn specifier(&self) -> String {
        format!("{}@{}", self.name, self.requirement)
    }

    /// Lowest version the requirement admits, if it parses as semver
    pub fn min_version(&self) -> Option<Version> {
        let req = VersionReq::parse(&self.requirement).ok()?;
        let lowest = req.comparators.first()?;
        Some(Version {
            major: lowest.major,
            minor: lowest.minor.unwrap_or(0),
            patch: lowest.patch.unwrap_or(0),
            pre: lowest.pre.clone(),
            build: BuildMetadata::EMPTY,
        })
    }

    /// `label @version` for the install prompt
    pub fn display(&self) -> String {
        match self.min_version() {
            Some(version) => format!("{} @{}", self.label, version),
            None => format!("{} @{}", self.label, self.requirement),
        }
    }
}

/// Install prompt listing every tool with its version.
///
/// The first three tools are comma separated, the rest space separated.
pub fn install_prompt(deps: &[DevDependency]) -> String {
    let mut out = String::from("Do you want to install");
    for (i, dep) in deps.iter().enumerate() {
        let sep = if i == 0 || i > 2 { " " } else { ", " };
        out.push_str(sep);
        out.push_str(&dep.display());
    }
    out.push('?');
    out
}
