//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── future     # [future]
//! │   ├── i18n       # [i18n]
//! │   ├── markdown   # on_broken_links, [markdown.hooks]
//! │   ├── preset     # [preset.docs], [preset.theme]
//! │   └── theme/     # [theme.navbar], [theme.footer], [theme.prism]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ValidationError
//! │   ├── handle     # Write-once global config
//! │   ├── presence   # Explicitly-set option paths
//! │   └── rule       # Validation rules
//! ├── schema         # SiteOptions and the option table
//! ├── resolve        # Options -> SiteConfig
//! ├── validate       # Fail-fast rule checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! site.toml ──parse──▶ SiteOptions ──merge(overrides)──▶ resolve ──▶ validate ──▶ SiteConfig
//! ```
//!
//! Every stage fails on its first error. Unknown keys are rejected during
//! parsing, missing required keys during resolution.

pub mod resolve;
pub mod schema;
pub mod section;
pub mod types;
mod util;
pub mod validate;

pub use resolve::{ResolveContext, resolve};
pub use schema::{OPTIONS, OptionSpec, SiteOptions};
pub use util::{ConfigFormat, find_config_file};
pub use validate::validate;

// Re-export from types/
pub use types::{ConfigError, ConfigPresence, Rule, ValidationError, init_config, render_error};

use section::{
    FutureConfig, I18nConfig, MarkdownConfig, PresetConfig, ReportingSeverity, ThemeConfig,
};
use serde::Serialize;
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Fully resolved site configuration.
///
/// Serializes with the same key layout as `site.toml`, so the output of
/// `docsite resolve` is itself a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub favicon: Option<String>,
    /// Origin only, without trailing slash.
    pub url: String,
    /// Always starts and ends with `/`.
    pub base_path: String,
    /// Repository owner, for deployment.
    pub organization: Option<String>,
    /// Repository name, for deployment.
    pub project: Option<String>,
    pub on_broken_links: ReportingSeverity,
    pub markdown: MarkdownConfig,
    pub i18n: I18nConfig,
    pub future: FutureConfig,
    pub preset: PresetConfig,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load a configuration file, apply `overrides`, resolve and validate.
    ///
    /// The format is picked from the file extension.
    pub fn load(
        path: &Path,
        overrides: SiteOptions,
        ctx: ResolveContext,
    ) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let options = SiteOptions::parse(&content, format)?.merge(overrides)?;
        Self::from_options(options, ctx)
    }

    /// Parse, resolve and validate configuration content.
    #[cfg(test)]
    pub fn from_str(
        content: &str,
        format: ConfigFormat,
        ctx: ResolveContext,
    ) -> Result<Self, ConfigError> {
        Self::from_options(SiteOptions::parse(content, format)?, ctx)
    }

    /// Resolve and validate already-parsed options.
    pub fn from_options(options: SiteOptions, ctx: ResolveContext) -> Result<Self, ConfigError> {
        let config = resolve(options, ctx)?;
        validate(&config)?;
        Ok(config)
    }

    /// Public URL of the site root: `url` followed by `base_path`.
    pub fn site_url(&self) -> String {
        format!("{}{}", self.url, self.base_path)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

#[cfg(test)]
pub const TEST_YEAR: i32 = 2026;

/// Parse options with the required `title` and `url` already set.
/// Panics on unknown keys (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteOptions {
    let content = format!("title = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    SiteOptions::parse(&content, ConfigFormat::Toml).unwrap()
}

/// Resolve (without validating) options built by [`test_parse_config`].
#[cfg(test)]
pub fn test_site_config(extra: &str) -> SiteConfig {
    resolve(test_parse_config(extra), ResolveContext::new(TEST_YEAR)).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CTX: ResolveContext = ResolveContext::new(TEST_YEAR);

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"My Site\"", ConfigFormat::Toml, CTX);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_str_minimal() {
        let config = SiteConfig::from_str(
            "title = \"FolderFlow\"\nurl = \"https://example.com\"",
            ConfigFormat::Toml,
            CTX,
        )
        .unwrap();
        assert_eq!(config.site_url(), "https://example.com/");
        assert_eq!(config.preset.docs.path, "docs");
    }

    #[test]
    fn test_from_str_runs_validation() {
        let err = SiteConfig::from_str(
            "title = \"FolderFlow\"\nurl = \"https://example.com\"\nbase_path = \"docs\"",
            ConfigFormat::Toml,
            CTX,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.rule == Rule::BasePath));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = SiteConfig::from_str(
            "title = \"FolderFlow\"\nurl = \"https://example.com\"\nfoo = 1",
            ConfigFormat::Toml,
            CTX,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOption { ref key } if key == "foo"));
    }

    #[test]
    fn test_resolved_output_is_valid_input() {
        let config = test_site_config(
            r#"
tagline = "Sort your files"
base_path = "/FolderFlow/"

[i18n]
locales = ["en", "fr"]

[preset.docs]
last_version = "current"
edit_url = "https://github.com/polocto/FolderFlow/tree/main/"

[preset.docs.versions.current]
label = "Next"
path = "next"

[[theme.navbar.items]]
type = "sidebar_link"
sidebar_id = "tutorialSidebar"
label = "User"

[[theme.navbar.items]]
type = "external_link"
href = "https://github.com/polocto/FolderFlow"
label = "GitHub"
position = "right"

[[theme.footer.links]]
title = "Docs"
items = [{ label = "Tutorial", to = "/docs/intro" }]
"#,
        );
        assert!(validate(&config).is_ok());

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&json, ConfigFormat::Json, CTX).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_placeholder_in_title_survives_round_trip() {
        let config = SiteConfig::from_str(
            "title = \"Docs {year}\"\nurl = \"https://example.com\"",
            ConfigFormat::Toml,
            CTX,
        )
        .unwrap();
        assert_eq!(config.theme.footer.copyright, "Copyright © 2026 Docs {year}.");

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&json, ConfigFormat::Json, CTX).unwrap();
        assert_eq!(reparsed.theme.footer.copyright, "Copyright © 2026 Docs {year}.");
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_load_applies_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "title = \"FolderFlow\"\nurl = \"https://example.com\"").unwrap();

        let overrides = SiteOptions {
            base_path: Some("/FolderFlow/".into()),
            ..SiteOptions::default()
        };
        let config = SiteConfig::load(file.path(), overrides, CTX).unwrap();
        assert_eq!(config.site_url(), "https://example.com/FolderFlow/");
        assert_eq!(config.title, "FolderFlow");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"title": "FolderFlow", "url": "https://polocto.github.io/FolderFlow/"}}"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path(), SiteOptions::default(), CTX).unwrap();
        assert_eq!(config.url, "https://polocto.github.io");
        assert_eq!(config.base_path, "/FolderFlow/");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        let err = SiteConfig::load(file.path(), SiteOptions::default(), CTX).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let err = SiteConfig::load(&path, SiteOptions::default(), CTX).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref p, _) if p == &path));
    }
}
