//! Order-preserving `package.json` document

use super::DevDependency;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Manifest file name in the project root
pub const PACKAGE_JSON: &str = "package.json";

#[derive(Error, Debug)]
pub enum PackageJsonError {
    #[error("{} not found in {}", PACKAGE_JSON, .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object at the top level", .0.display())]
    NotAnObject(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded `package.json`. Unknown fields and key order are preserved.
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageJson {
    /// Read `<dir>/package.json`
    pub async fn load(dir: &Path) -> Result<Self, PackageJsonError> {
        let path = dir.join(PACKAGE_JSON);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PackageJsonError::NotFound(dir.to_path_buf()))
            }
            Err(source) => return Err(PackageJsonError::Read { path, source }),
        };

        Self::parse(path, &content)
    }

    /// Parse manifest text that lives at `path`
    pub fn parse(path: PathBuf, content: &str) -> Result<Self, PackageJsonError> {
        let value: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(source) => return Err(PackageJsonError::Parse { path, source }),
        };

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(PackageJsonError::NotAnObject(path)),
        }
    }

    /// Top-level string field (e.g. "packageManager")
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.root.get(key).and_then(Value::as_str)
    }

    /// Merge `scripts` into the existing scripts; given names win.
    ///
    /// A missing or non-object `scripts` field is replaced.
    pub fn apply_scripts<'a, I>(&mut self, scripts: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let section = object_entry(&mut self.root, "scripts");
        for (name, command) in scripts {
            section.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    /// Whether `name` is declared in `section` with a non-empty value
    pub fn declares(&self, section: &str, name: &str) -> bool {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .and_then(|deps| deps.get(name))
            .is_some_and(is_declared)
    }

    /// Add each tool to `devDependencies` unless it is already declared in
    /// `devDependencies` or `dependencies`. Returns the names that were added.
    pub fn add_missing_dev_dependencies(&mut self, deps: &[DevDependency]) -> Vec<String> {
        let missing: Vec<&DevDependency> = deps
            .iter()
            .filter(|dep| {
                !self.declares("devDependencies", &dep.name)
                    && !self.declares("dependencies", &dep.name)
            })
            .collect();

        let section = object_entry(&mut self.root, "devDependencies");
        missing
            .into_iter()
            .map(|dep| {
                section.insert(dep.name.clone(), Value::String(dep.requirement.clone()));
                dep.name.clone()
            })
            .collect()
    }

    /// Pretty JSON with a 2-space indent, no trailing newline
    pub fn render(&self) -> String {
        format!("{:#}", Value::Object(self.root.clone()))
    }

    /// Write the document back to where it was loaded from
    pub async fn save(&self) -> Result<(), PackageJsonError> {
        fs::write(&self.path, self.render())
            .await
            .map_err(|source| PackageJsonError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// Missing, null, `false` and empty-string values do not count as declared
fn is_declared(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Get `root[key]` as an object, replacing anything that is not one
fn object_entry<'a>(root: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let entry = root
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    match entry {
        Value::Object(map) => map,
        _ => unreachable!("entry was just made an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{Preset, ReactNativePreset};
    use tempfile::TempDir;

    fn parse(content: &str) -> PackageJson {
        PackageJson::parse(PathBuf::from(PACKAGE_JSON), content).unwrap()
    }

    #[test]
    fn test_scripts_merged_and_overwritten() {
        let mut pkg = parse(
            r#"{"name": "app", "scripts": {"start": "react-native start", "lint": "old"}}"#,
        );
        pkg.apply_scripts(ReactNativePreset.scripts());

        assert_eq!(
            pkg.render(),
            r#"{
  "name": "app",
  "scripts": {
    "start": "react-native start",
    "lint": "eslint '**/*.{js,ts,jsx,tsx}'",
    "format": "prettier --write ."
  }
}"#
        );
    }

    #[test]
    fn test_scripts_created_when_missing() {
        let mut pkg = parse(r#"{"name": "app"}"#);
        pkg.apply_scripts([("lint", "eslint .")]);
        assert!(pkg.render().contains("\"scripts\": {\n    \"lint\": \"eslint .\"\n  }"));
    }

    #[test]
    fn test_declared_tools_not_re_added() {
        let mut pkg = parse(
            r#"{
                "dependencies": {"typescript": "5.0.0"},
                "devDependencies": {"eslint": "^9.0.0", "prettier": ""}
            }"#,
        );
        let added = pkg.add_missing_dev_dependencies(&ReactNativePreset.dev_dependencies());

        assert_eq!(
            added,
            vec!["prettier", "@react-native/eslint-config", "@tsconfig/react-native"]
        );
        let rendered = pkg.render();
        assert!(rendered.contains("\"eslint\": \"^9.0.0\""));
        assert!(rendered.contains("\"prettier\": \"^2.8.0\""));
        assert!(!rendered.contains("\"typescript\": \"^5.4.5\""));
    }

    #[test]
    fn test_missing_sections_are_created() {
        let mut pkg = parse(r#"{"name": "app"}"#);
        let added = pkg.add_missing_dev_dependencies(&ReactNativePreset.dev_dependencies());

        assert_eq!(added.len(), 5);
        assert!(pkg.declares("devDependencies", "@tsconfig/react-native"));
        assert!(!pkg.declares("dependencies", "eslint"));
    }

    #[test]
    fn test_untouched_numbers_keep_their_text() {
        let mut pkg = parse(
            r#"{"name": "app", "config": {"port": 1e3, "big": 18446744073709551617}}"#,
        );
        pkg.apply_scripts(ReactNativePreset.scripts());

        let rendered = pkg.render();
        assert!(rendered.contains("\"port\": 1e3"));
        assert!(rendered.contains("\"big\": 18446744073709551617"));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let result = PackageJson::parse(PathBuf::from(PACKAGE_JSON), "[]");
        assert!(matches!(result, Err(PackageJsonError::NotAnObject(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = PackageJson::parse(PathBuf::from(PACKAGE_JSON), "{name:");
        assert!(matches!(result, Err(PackageJsonError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let result = PackageJson::load(dir.path()).await;
        assert!(matches!(result, Err(PackageJsonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_round_trips_to_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PACKAGE_JSON),
            r#"{"name": "app", "version": "1.0.0", "private": true}"#,
        )
        .unwrap();

        let mut pkg = PackageJson::load(dir.path()).await.unwrap();
        pkg.apply_scripts(ReactNativePreset.scripts());
        pkg.add_missing_dev_dependencies(&ReactNativePreset.dev_dependencies());
        pkg.save().await.unwrap();

        let written = std::fs::read_to_string(dir.path().join(PACKAGE_JSON)).unwrap();
        assert!(written.starts_with("{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\""));
        assert!(!written.ends_with('\n'));
        assert!(written.contains("\"devDependencies\": {\n    \"eslint\": \"^8.57.0\""));
    }
}
