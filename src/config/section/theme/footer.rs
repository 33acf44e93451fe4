//! `[theme.footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} FolderFlow."
//!
//! [[theme.footer.links]]
//! title = "Docs"
//! items = [
//!     { label = "User Guide", to = "/user-guide/" },
//!     { label = "GitHub", href = "https://github.com/polocto/FolderFlow" },
//! ]
//! ```
//!
//! `{year}` and `{title}` in `copyright` are replaced with the resolve year
//! and the site title. The resolved footer keeps the unexpanded line in
//! `copyright_template`, which takes precedence over `copyright` when a
//! resolved config is read back in.

use crate::config::validate::{absolute_url, fail, non_empty};
use crate::config::{ConfigError, Rule, ValidationError};
use serde::{Deserialize, Serialize};

/// Copyright line used when none is configured.
pub const DEFAULT_COPYRIGHT: &str = "Copyright © {year} {title}.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterOptions {
    pub style: Option<FooterStyle>,
    pub links: Option<Vec<FooterGroupOptions>>,
    pub copyright: Option<String>,
    pub copyright_template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterGroupOptions {
    pub title: Option<String>,
    pub items: Option<Vec<FooterLinkOptions>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinkOptions {
    pub label: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
}

/// Resolved footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub links: Vec<FooterGroup>,
    /// Rendered copyright line.
    pub copyright: String,
    /// Copyright line before placeholder substitution.
    pub copyright_template: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FooterLink {
    /// Route inside the site.
    Internal { label: String, to: String },
    /// Absolute external URL.
    External { label: String, href: String },
}

impl FooterOptions {
    pub fn resolve(self, site_title: &str, year: i32) -> Result<FooterConfig, ConfigError> {
        let links = self
            .links
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, group)| group.resolve(&format!("theme.footer.links.{index}")))
            .collect::<Result<Vec<_>, _>>()?;

        // A rendered `copyright` is only used when no template travels with it.
        let template = self
            .copyright_template
            .or(self.copyright)
            .unwrap_or_else(|| DEFAULT_COPYRIGHT.to_string());

        Ok(FooterConfig {
            style: self.style.unwrap_or_default(),
            links,
            copyright: expand_copyright(&template, site_title, year),
            copyright_template: template,
        })
    }
}

impl FooterGroupOptions {
    fn resolve(self, path: &str) -> Result<FooterGroup, ConfigError> {
        let title = self
            .title
            .ok_or_else(|| ConfigError::missing(format!("{path}.title")))?;
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, link)| link.resolve(&format!("{path}.items.{index}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FooterGroup { title, items })
    }
}

impl FooterLinkOptions {
    fn resolve(self, path: &str) -> Result<FooterLink, ConfigError> {
        let label = self
            .label
            .ok_or_else(|| ConfigError::missing(format!("{path}.label")))?;

        match (self.to, self.href) {
            (Some(to), None) => Ok(FooterLink::Internal { label, to }),
            (None, Some(href)) => Ok(FooterLink::External { label, href }),
            (None, None) => Err(ConfigError::missing(format!("{path}.to"))),
            (Some(to), Some(href)) => Err(ValidationError::new(
                Rule::FooterTarget,
                path,
                format!("to = {to:?}, href = {href:?}"),
            )
            .into()),
        }
    }
}

impl FooterLink {
    pub fn label(&self) -> &str {
        match self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }
}

impl FooterConfig {
    /// # Checks
    /// - every group has a title, every link a label
    /// - internal routes start with `/`, external links are absolute URLs
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (g, group) in self.links.iter().enumerate() {
            let group_path = format!("theme.footer.links.{g}");
            non_empty(Rule::FooterTitle, format!("{group_path}.title"), &group.title)?;

            for (i, link) in group.items.iter().enumerate() {
                let field = |name: &str| format!("{group_path}.items.{i}.{name}");
                non_empty(Rule::FooterLabel, field("label"), link.label())?;
                match link {
                    FooterLink::Internal { to, .. } => {
                        if !to.starts_with('/') {
                            return fail(Rule::FooterRoute, field("to"), to);
                        }
                    }
                    FooterLink::External { href, .. } => {
                        absolute_url(Rule::FooterHref, field("href"), href)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Substitute `{year}` and `{title}` placeholders.
fn expand_copyright(template: &str, site_title: &str, year: i32) -> String {
    template
        .replace("{year}", &year.to_string())
        .replace("{title}", site_title)
}
