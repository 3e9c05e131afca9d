//! Preset trait and the built-in React Native preset
//!
//! A preset describes everything one stack needs: which legacy ESLint files
//! conflict with the generated one, which config files get written, which
//! `package.json` scripts are set, and which tools are declared and installed.

use crate::config::{ConfigFile, FileFormat};
use crate::manifest::DevDependency;
use serde_json::json;

/// Configuration trait for different project stacks
///
/// Each stack implements this trait to define:
/// - Display name
/// - Legacy config files that would shadow the generated ESLint config
/// - The config files to write, in order
/// - `package.json` scripts and tool versions
pub trait Preset: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// ESLint config filenames that conflict with the generated `.eslintrc.js`
    fn conflicting_eslint_files(&self) -> &'static [&'static str];

    /// Config files to write, in the order they are written
    fn config_files(&self) -> Vec<ConfigFile>;

    /// `package.json` scripts to set (name, command)
    fn scripts(&self) -> Vec<(&'static str, &'static str)>;

    /// Tools declared under `devDependencies` and installed
    fn dev_dependencies(&self) -> Vec<DevDependency>;
}

/// React Native preset: `@react-native` ESLint rules, import-sorted Prettier,
/// strict `@tsconfig/react-native`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactNativePreset;

/// Legacy ESLint config names, checked in this order
const RN_CONFLICTING_ESLINT_FILES: &[&str] = &[
    ".eslintrc.json",
    ".eslintrc.cjs",
    ".eslintrc.mjs",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
];

const RN_PRETTIER_IGNORE: &[&str] = &["build", "node_modules", "README.md", ".next", "out"];

impl Preset for ReactNativePreset {
    fn display_name(&self) -> &'static str {
        "React Native"
    }

    fn conflicting_eslint_files(&self) -> &'static [&'static str] {
        RN_CONFLICTING_ESLINT_FILES
    }

    fn config_files(&self) -> Vec<ConfigFile> {
        vec![
            ConfigFile::new(
                ".eslintrc.js",
                FileFormat::ModuleExports,
                json!({
                    "root": true,
                    "extends": "@react-native",
                    "rules": {
                        "react/react-in-jsx-scope": "off",
                        "@typescript-eslint/no-shadow": "off",
                        "@typescript-eslint/no-explicit-any": "error"
                    },
                    "parserOptions": {
                        "requireConfigFile": false
                    }
                }),
            ),
            ConfigFile::new(
                ".prettierrc.js",
                FileFormat::ModuleExports,
                json!({
                    "arrowParens": "avoid",
                    "bracketSameLine": true,
                    "bracketSpacing": false,
                    "singleQuote": true,
                    "trailingComma": "all",
                    "importOrder": [
                        "^react$",
                        "^react-native$",
                        "<THIRD_PARTY_MODULES>",
                        "^@core/(.*)$",
                        "^@server/(.*)$",
                        "^@ui/(.*)$",
                        "^[./]"
                    ],
                    "importOrderSeparation": false,
                    "importOrderSortSpecifiers": true
                }),
            ),
            ConfigFile::new(
                "tsconfig.json",
                FileFormat::Json,
                json!({
                    "extends": "@tsconfig/react-native/tsconfig.json",
                    "compilerOptions": {
                        "noImplicitAny": true,
                        "strictFunctionTypes": true,
                        "strictPropertyInitialization": true,
                        "noImplicitThis": true,
                        "alwaysStrict": true
                    }
                }),
            ),
            ConfigFile::text(".prettierignore", RN_PRETTIER_IGNORE.join("\n")),
        ]
    }

    fn scripts(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("lint", "eslint '**/*.{js,ts,jsx,tsx}'"),
            ("format", "prettier --write ."),
        ]
    }

    fn dev_dependencies(&self) -> Vec<DevDependency> {
        [
            ("eslint", "ESLint", "^8.57.0"),
            ("prettier", "prettier", "^2.8.0"),
            ("typescript", "typescript", "^5.4.5"),
            (
                "@react-native/eslint-config",
                "@react-native/eslint-config",
                "^0.74.84",
            ),
            ("@tsconfig/react-native", "@tsconfig/react-native", "^3.0.5"),
        ]
        .into_iter()
        .map(|(name, label, req)| DevDependency::new(name, label, req))
        .collect()
    }
}
