//! `[theme.prism]` code highlighting configuration.

use crate::config::validate::fail;
use crate::config::{Rule, ValidationError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIGHT_THEME: &str = "github";
pub const DEFAULT_DARK_THEME: &str = "dracula";

/// Themes bundled with the highlighter.
pub const KNOWN_THEMES: &[&str] = &[
    "dracula",
    "duotoneDark",
    "duotoneLight",
    "github",
    "gruvboxMaterialDark",
    "gruvboxMaterialLight",
    "jettwaveDark",
    "jettwaveLight",
    "nightOwl",
    "nightOwlLight",
    "oceanicNext",
    "okaidia",
    "oneDark",
    "oneLight",
    "palenight",
    "shadesOfPurple",
    "synthwave84",
    "ultramin",
    "vsDark",
    "vsLight",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismOptions {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
}

/// Light/dark highlighting theme pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrismConfig {
    pub theme: String,
    pub dark_theme: String,
}

impl PrismOptions {
    pub fn resolve(self) -> PrismConfig {
        PrismConfig {
            theme: self.theme.unwrap_or_else(|| DEFAULT_LIGHT_THEME.to_string()),
            dark_theme: self
                .dark_theme
                .unwrap_or_else(|| DEFAULT_DARK_THEME.to_string()),
        }
    }
}

impl PrismConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, name) in [
            ("theme.prism.theme", &self.theme),
            ("theme.prism.dark_theme", &self.dark_theme),
        ] {
            if !KNOWN_THEMES.contains(&name.as_str()) {
                return fail(Rule::PrismTheme, field, name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prism_defaults() {
        let prism = PrismOptions::default().resolve();
        assert_eq!(prism.theme, "github");
        assert_eq!(prism.dark_theme, "dracula");
        assert!(prism.validate().is_ok());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let prism = PrismOptions {
            dark_theme: Some("solarized".into()),
            ..PrismOptions::default()
        }
        .resolve();
        let err = prism.validate().unwrap_err();
        assert_eq!(err.rule, Rule::PrismTheme);
        assert_eq!(err.field, "theme.prism.dark_theme");
        assert_eq!(err.value, "solarized");
    }
}
