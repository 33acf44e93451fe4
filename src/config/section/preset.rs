//! `[preset]` section configuration: the docs plugin, blog toggle and
//! preset-level theme stylesheet.
//!
//! # Example
//!
//! ```toml
//! [preset]
//! blog = false
//!
//! [preset.docs]
//! sidebar_path = "./sidebars.ts"
//! edit_url = "https://github.com/polocto/FolderFlow/tree/main/docs"
//! route_base_path = ""
//! last_version = "current"
//!
//! [preset.docs.versions.current]
//! label = "Next"
//! path = "next"
//!
//! [preset.theme]
//! custom_css = "./src/css/custom.css"
//! ```

use crate::config::validate::{absolute_url, fail, non_empty};
use crate::config::{Rule, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the unreleased, in-progress docs version.
pub const CURRENT_VERSION: &str = "current";

pub const DEFAULT_DOCS_PATH: &str = "docs";
pub const DEFAULT_ROUTE_BASE_PATH: &str = "docs";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetOptions {
    pub docs: DocsOptions,
    pub blog: Option<bool>,
    pub theme: PresetThemeOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsOptions {
    pub path: Option<String>,
    pub sidebar_path: Option<String>,
    pub edit_url: Option<String>,
    pub route_base_path: Option<String>,
    pub last_version: Option<String>,
    pub versions: Option<BTreeMap<String, VersionOptions>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionOptions {
    pub label: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetThemeOptions {
    pub custom_css: Option<String>,
}

/// Resolved preset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetConfig {
    pub docs: DocsConfig,
    /// Whether the blog plugin is enabled.
    pub blog: bool,
    pub theme: PresetThemeConfig,
}

/// Docs plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsConfig {
    /// Docs source directory.
    pub path: String,
    /// Sidebars definition file.
    pub sidebar_path: Option<String>,
    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
    /// URL route the docs are served under (empty: site root).
    pub route_base_path: String,
    /// Version shown by default.
    pub last_version: String,
    /// Version key → display settings.
    pub versions: BTreeMap<String, VersionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConfig {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetThemeConfig {
    /// Stylesheet appended after the theme's own.
    pub custom_css: Option<String>,
}

impl PresetOptions {
    pub fn resolve(self) -> PresetConfig {
        PresetConfig {
            docs: self.docs.resolve(),
            blog: self.blog.unwrap_or(true),
            theme: PresetThemeConfig {
                custom_css: self.theme.custom_css,
            },
        }
    }
}

impl DocsOptions {
    fn resolve(self) -> DocsConfig {
        let versions = self
            .versions
            .unwrap_or_default()
            .into_iter()
            .map(|(key, version)| {
                let version = VersionConfig {
                    label: version.label.unwrap_or_default(),
                    path: version.path.unwrap_or_default(),
                };
                (key, version)
            })
            .collect();

        DocsConfig {
            path: self.path.unwrap_or_else(|| DEFAULT_DOCS_PATH.to_string()),
            sidebar_path: self.sidebar_path,
            edit_url: self.edit_url,
            route_base_path: self
                .route_base_path
                .unwrap_or_else(|| DEFAULT_ROUTE_BASE_PATH.to_string()),
            last_version: self
                .last_version
                .unwrap_or_else(|| CURRENT_VERSION.to_string()),
            versions,
        }
    }
}

impl DocsConfig {
    /// Versioning is enabled once any version is declared.
    #[inline]
    pub fn versioning_enabled(&self) -> bool {
        !self.versions.is_empty()
    }

    /// # Checks
    /// - `path` is non-empty, `edit_url` (if set) is absolute
    /// - with versioning enabled, `current` exists and every entry has a
    ///   label and a path
    /// - `last_version` names a declared version (or `current`)
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty(Rule::DocsPath, "preset.docs.path", &self.path)?;

        if let Some(edit_url) = &self.edit_url {
            absolute_url(Rule::EditUrl, "preset.docs.edit_url", edit_url)?;
        }

        if self.versioning_enabled() {
            if !self.versions.contains_key(CURRENT_VERSION) {
                let keys: Vec<&str> = self.versions.keys().map(String::as_str).collect();
                return fail(Rule::CurrentVersion, "preset.docs.versions", keys.join(", "));
            }

            for (key, version) in &self.versions {
                let field = format!("preset.docs.versions.{key}");
                non_empty(Rule::VersionLabel, format!("{field}.label"), &version.label)?;
                non_empty(Rule::VersionPath, format!("{field}.path"), &version.path)?;
            }
        }

        let known = if self.versioning_enabled() {
            self.versions.contains_key(&self.last_version)
        } else {
            self.last_version == CURRENT_VERSION
        };
        if !known {
            return fail(
                Rule::LastVersion,
                "preset.docs.last_version",
                &self.last_version,
            );
        }

        Ok(())
    }
}
