//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "FolderFlow"
//! logo = "img/folderflow.svg"
//!
//! [[theme.navbar.items]]
//! type = "sidebar_link"
//! sidebar_id = "tutorialSidebar"
//! label = "User"
//!
//! [[theme.navbar.items]]
//! type = "version_dropdown"
//! position = "right"
//!
//! [[theme.navbar.items]]
//! type = "external_link"
//! href = "https://github.com/polocto/FolderFlow"
//! label = "GitHub"
//! position = "right"
//! ```

use crate::config::validate::{absolute_url, non_empty};
use crate::config::{ConfigError, Rule, ValidationError};
use serde::{Deserialize, Serialize};

/// Label of a version dropdown that does not set one.
pub const DEFAULT_VERSION_DROPDOWN_LABEL: &str = "Versions";

/// Kind tag of a navbar entry (`type` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItemKind {
    SidebarLink,
    ExternalLink,
    VersionDropdown,
}

/// Side of the navbar an entry is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarOptions {
    pub title: Option<String>,
    pub logo: Option<String>,
    pub items: Option<Vec<NavItemOptions>>,
}

/// A navbar entry as written; which keys apply depends on `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItemOptions {
    #[serde(rename = "type")]
    pub kind: Option<NavItemKind>,
    pub label: Option<String>,
    pub sidebar_id: Option<String>,
    pub href: Option<String>,
    pub position: Option<NavPosition>,
}

/// Resolved navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavbarConfig {
    pub title: String,
    pub logo: Option<String>,
    pub items: Vec<NavItem>,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// Opens the first page of a docs sidebar.
    SidebarLink {
        sidebar_id: String,
        label: String,
        position: NavPosition,
    },
    /// Links outside the site.
    ExternalLink {
        href: String,
        label: String,
        position: NavPosition,
    },
    /// Switches between docs versions.
    VersionDropdown { label: String, position: NavPosition },
}

impl NavbarOptions {
    /// The title falls back to the site title.
    pub fn resolve(self, site_title: &str) -> Result<NavbarConfig, ConfigError> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.resolve(&format!("theme.navbar.items.{index}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NavbarConfig {
            title: self.title.unwrap_or_else(|| site_title.to_string()),
            logo: self.logo,
            items,
        })
    }
}

impl NavItemOptions {
    /// Turn the flat entry into its tagged variant.
    ///
    /// Keys required by the kind must be present; keys belonging to another
    /// kind are rejected as unknown.
    fn resolve(self, path: &str) -> Result<NavItem, ConfigError> {
        let key = |name: &str| format!("{path}.{name}");
        let kind = self.kind.ok_or_else(|| ConfigError::missing(key("type")))?;
        let position = self.position.unwrap_or_default();

        match kind {
            NavItemKind::SidebarLink => {
                if self.href.is_some() {
                    return Err(ConfigError::unknown(key("href")));
                }
                Ok(NavItem::SidebarLink {
                    sidebar_id: self
                        .sidebar_id
                        .ok_or_else(|| ConfigError::missing(key("sidebar_id")))?,
                    label: self.label.ok_or_else(|| ConfigError::missing(key("label")))?,
                    position,
                })
            }
            NavItemKind::ExternalLink => {
                if self.sidebar_id.is_some() {
                    return Err(ConfigError::unknown(key("sidebar_id")));
                }
                Ok(NavItem::ExternalLink {
                    href: self.href.ok_or_else(|| ConfigError::missing(key("href")))?,
                    label: self.label.ok_or_else(|| ConfigError::missing(key("label")))?,
                    position,
                })
            }
            NavItemKind::VersionDropdown => {
                if self.sidebar_id.is_some() {
                    return Err(ConfigError::unknown(key("sidebar_id")));
                }
                if self.href.is_some() {
                    return Err(ConfigError::unknown(key("href")));
                }
                Ok(NavItem::VersionDropdown {
                    label: self
                        .label
                        .unwrap_or_else(|| DEFAULT_VERSION_DROPDOWN_LABEL.to_string()),
                    position,
                })
            }
        }
    }
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::SidebarLink { label, .. }
            | Self::ExternalLink { label, .. }
            | Self::VersionDropdown { label, .. } => label,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> NavPosition {
        match self {
            Self::SidebarLink { position, .. }
            | Self::ExternalLink { position, .. }
            | Self::VersionDropdown { position, .. } => *position,
        }
    }
}

impl NavbarConfig {
    /// # Checks
    /// - every item has a non-empty label
    /// - sidebar links name a sidebar, external links use absolute URLs
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, item) in self.items.iter().enumerate() {
            let field = |name: &str| format!("theme.navbar.items.{index}.{name}");
            non_empty(Rule::NavLabel, field("label"), item.label())?;
            match item {
                NavItem::SidebarLink { sidebar_id, .. } => {
                    non_empty(Rule::NavSidebarId, field("sidebar_id"), sidebar_id)?;
                }
                NavItem::ExternalLink { href, .. } => {
                    absolute_url(Rule::NavHref, field("href"), href)?;
                }
                NavItem::VersionDropdown { .. } => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar(id: &str, label: &str) -> NavItemOptions {
        NavItemOptions {
            kind: Some(NavItemKind::SidebarLink),
            sidebar_id: Some(id.into()),
            label: Some(label.into()),
            ..NavItemOptions::default()
        }
    }

    #[test]
    fn test_empty_items_are_legal() {
        let navbar = NavbarOptions {
            items: Some(Vec::new()),
            ..NavbarOptions::default()
        }
        .resolve("FolderFlow")
        .unwrap();
        assert!(navbar.items.is_empty());
        assert_eq!(navbar.title, "FolderFlow");
        assert!(navbar.validate().is_ok());
    }

    #[test]
    fn test_resolve_variants() {
        let navbar = NavbarOptions {
            items: Some(vec![
                sidebar("tutorialSidebar", "User"),
                NavItemOptions {
                    kind: Some(NavItemKind::VersionDropdown),
                    position: Some(NavPosition::Right),
                    ..NavItemOptions::default()
                },
            ]),
            ..NavbarOptions::default()
        }
        .resolve("FolderFlow")
        .unwrap();

        assert_eq!(
            navbar.items[0],
            NavItem::SidebarLink {
                sidebar_id: "tutorialSidebar".into(),
                label: "User".into(),
                position: NavPosition::Left,
            }
        );
        assert_eq!(navbar.items[1].label(), "Versions");
        assert_eq!(navbar.items[1].position(), NavPosition::Right);
    }

    #[test]
    fn test_missing_kind_and_required_keys() {
        let err = NavItemOptions::default()
            .resolve("theme.navbar.items.0")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredOption { ref key } if key == "theme.navbar.items.0.type"
        ));

        let item = NavItemOptions {
            kind: Some(NavItemKind::ExternalLink),
            label: Some("GitHub".into()),
            ..NavItemOptions::default()
        };
        let err = item.resolve("theme.navbar.items.3").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredOption { ref key } if key == "theme.navbar.items.3.href"
        ));
    }

    #[test]
    fn test_key_of_other_kind_is_unknown() {
        let mut item = sidebar("tutorialSidebar", "User");
        item.href = Some("https://example.com".into());
        let err = item.resolve("theme.navbar.items.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownOption { ref key } if key == "theme.navbar.items.0.href"
        ));
    }

    #[test]
    fn test_validate_labels_and_targets() {
        let navbar = NavbarOptions {
            items: Some(vec![sidebar("tutorialSidebar", "User"), sidebar("dev", "")]),
            ..NavbarOptions::default()
        }
        .resolve("FolderFlow")
        .unwrap();
        let err = navbar.validate().unwrap_err();
        assert_eq!(err.rule, Rule::NavLabel);
        assert_eq!(err.field, "theme.navbar.items.1.label");

        let navbar = NavbarConfig {
            title: "FolderFlow".into(),
            logo: None,
            items: vec![NavItem::ExternalLink {
                href: "github.com/polocto".into(),
                label: "GitHub".into(),
                position: NavPosition::Right,
            }],
        };
        assert_eq!(navbar.validate().unwrap_err().rule, Rule::NavHref);
    }

    #[test]
    fn test_serialized_item_is_tagged() {
        let item = NavItem::VersionDropdown {
            label: "Versions".into(),
            position: NavPosition::Right,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "version_dropdown", "label": "Versions", "position": "right"})
        );
    }
}
