//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! image = "img/folderflow.svg"
//!
//! [theme.color_mode]
//! respect_prefers_color_scheme = true
//!
//! [theme.navbar]
//! title = "FolderFlow"
//!
//! [theme.footer]
//! style = "dark"
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

pub mod footer;
pub mod navbar;
pub mod prism;

pub use footer::{FooterConfig, FooterOptions};
pub use navbar::{NavbarConfig, NavbarOptions};
pub use prism::{PrismConfig, PrismOptions};

use crate::config::{ConfigError, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub image: Option<String>,
    pub color_mode: ColorModeOptions,
    pub navbar: NavbarOptions,
    pub footer: FooterOptions,
    pub prism: PrismOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeOptions {
    pub default_mode: Option<ColorScheme>,
    pub disable_switch: Option<bool>,
    pub respect_prefers_color_scheme: Option<bool>,
}

/// Resolved theme settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Social card image.
    pub image: Option<String>,
    pub color_mode: ColorModeConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub prism: PrismConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorModeConfig {
    pub default_mode: ColorScheme,
    /// Hide the light/dark switch.
    pub disable_switch: bool,
    /// Follow the visitor's system preference instead of `default_mode`.
    pub respect_prefers_color_scheme: bool,
}

impl ThemeOptions {
    pub fn resolve(self, site_title: &str, year: i32) -> Result<ThemeConfig, ConfigError> {
        Ok(ThemeConfig {
            image: self.image,
            color_mode: ColorModeConfig {
                default_mode: self.color_mode.default_mode.unwrap_or_default(),
                disable_switch: self.color_mode.disable_switch.unwrap_or(false),
                respect_prefers_color_scheme: self
                    .color_mode
                    .respect_prefers_color_scheme
                    .unwrap_or(false),
            },
            navbar: self.navbar.resolve(site_title)?,
            footer: self.footer.resolve(site_title, year)?,
            prism: self.prism.resolve(),
        })
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.navbar.validate()?;
        self.footer.validate()?;
        self.prism.validate()
    }
}
