//! Option schema: recognized keys, parsing, and required-key checks.
//!
//! User input is parsed into [`SiteOptions`], where every key is optional so
//! that "absent" and "set" stay distinguishable until resolution. Keys the
//! schema does not know are rejected rather than ignored.

use super::section::{
    FutureOptions, I18nOptions, MarkdownOptions, PresetOptions, ReportingSeverity, ThemeOptions,
};
use super::{ConfigError, ConfigFormat, ConfigPresence};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// options tree
// ============================================================================

/// Site options as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub favicon: Option<String>,
    pub url: Option<String>,
    pub base_path: Option<String>,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub on_broken_links: Option<ReportingSeverity>,
    pub markdown: MarkdownOptions,
    pub i18n: I18nOptions,
    pub future: FutureOptions,
    pub preset: PresetOptions,
    pub theme: ThemeOptions,
}

impl SiteOptions {
    /// Parse options, rejecting the first unknown key.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let (options, ignored) = Self::parse_with_ignored(content, format)?;
        match ignored.into_iter().next() {
            Some(key) => Err(ConfigError::UnknownOption { key }),
            None => Ok(options),
        }
    }

    /// Parse content, collecting any unknown keys in document order.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let options = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, on_ignored)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let options = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                options
            }
        };
        Ok((options, ignored))
    }

    /// Deep-merge `overlay` over `self`.
    ///
    /// Groups merge key by key, set leaves in `overlay` win, sequences and
    /// maps of versions are replaced whole.
    pub fn merge(self, overlay: SiteOptions) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        merge_value(&mut base, serde_json::to_value(overlay)?, "");
        Ok(serde_json::from_value(base)?)
    }

    /// Dotted paths of every key set in these options.
    pub fn presence(&self) -> Result<ConfigPresence, ConfigError> {
        Ok(ConfigPresence::from_value(&serde_json::to_value(self)?))
    }
}

/// Maps keyed by user-chosen names; an overlay replaces them whole.
const REPLACED_MAPS: &[&str] = &["preset.docs.versions"];

fn merge_value(base: &mut Value, overlay: Value, path: &str) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(overlay)) if !REPLACED_MAPS.contains(&path) => {
            for (key, value) in overlay {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match base.get_mut(&key) {
                    Some(slot) => merge_value(slot, value, &child),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Fail on the first required key (in schema order) missing from `options`.
pub fn require(options: &SiteOptions) -> Result<(), ConfigError> {
    let presence = options.presence()?;
    OPTIONS
        .iter()
        .filter(|spec| spec.default == OptionDefault::Required)
        .find(|spec| !presence.contains(spec.key))
        .map_or(Ok(()), |spec| Err(ConfigError::missing(spec.key)))
}

// ============================================================================
// schema table
// ============================================================================

/// Default of a recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    /// Must be present in the input.
    Required,
    /// Required on entries of the named kind.
    RequiredFor(&'static str),
    /// Absent unless set.
    Unset,
    /// Literal default.
    Value(&'static str),
    /// Computed from other options.
    Derived(&'static str),
}

impl OptionDefault {
    pub fn describe(&self) -> String {
        match self {
            Self::Required => "required".to_string(),
            Self::RequiredFor(kind) => format!("required for {kind}"),
            Self::Unset => "unset".to_string(),
            Self::Value(value) => value.to_string(),
            Self::Derived(from) => format!("from {from}"),
        }
    }
}

/// A recognized option key.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Dotted path; entries of a sequence share the sequence's path.
    pub key: &'static str,
    /// Expected value type.
    pub kind: &'static str,
    pub default: OptionDefault,
}

const fn opt(key: &'static str, kind: &'static str, default: OptionDefault) -> OptionSpec {
    OptionSpec { key, kind, default }
}

use OptionDefault::{Derived, Required, RequiredFor, Unset, Value as Lit};

/// Every recognized option, in documentation order.
pub const OPTIONS: &[OptionSpec] = &[
    opt("title", "string", Required),
    opt("tagline", "string", Lit("\"\"")),
    opt("favicon", "path", Unset),
    opt("url", "url", Required),
    opt("base_path", "path", Derived("url path, else \"/\"")),
    opt("organization", "string", Unset),
    opt("project", "string", Unset),
    opt("on_broken_links", "ignore|warn|error", Lit("error")),
    opt(
        "markdown.hooks.on_broken_markdown_links",
        "ignore|warn|error",
        Lit("warn"),
    ),
    opt("i18n.default_locale", "locale", Derived("first of i18n.locales")),
    opt(
        "i18n.locales",
        "[locale]",
        Derived("[i18n.default_locale], else [\"en\"]"),
    ),
    opt("future.v4", "bool", Lit("false")),
    opt("preset.docs.path", "path", Lit("docs")),
    opt("preset.docs.sidebar_path", "path", Unset),
    opt("preset.docs.edit_url", "url", Unset),
    opt("preset.docs.route_base_path", "string", Lit("docs")),
    opt("preset.docs.last_version", "string", Lit("current")),
    opt("preset.docs.versions", "{name: version}", Lit("{}")),
    opt("preset.docs.versions.<name>.label", "string", RequiredFor("versions")),
    opt("preset.docs.versions.<name>.path", "string", RequiredFor("versions")),
    opt("preset.blog", "bool", Lit("true")),
    opt("preset.theme.custom_css", "path", Unset),
    opt("theme.image", "path", Unset),
    opt("theme.color_mode.default_mode", "light|dark", Lit("light")),
    opt("theme.color_mode.disable_switch", "bool", Lit("false")),
    opt(
        "theme.color_mode.respect_prefers_color_scheme",
        "bool",
        Lit("false"),
    ),
    opt("theme.navbar.title", "string", Derived("title")),
    opt("theme.navbar.logo", "path", Unset),
    opt("theme.navbar.items", "[nav item]", Lit("[]")),
    opt(
        "theme.navbar.items.type",
        "sidebar_link|external_link|version_dropdown",
        RequiredFor("nav items"),
    ),
    opt(
        "theme.navbar.items.label",
        "string",
        RequiredFor("links; \"Versions\" for version_dropdown"),
    ),
    opt("theme.navbar.items.sidebar_id", "string", RequiredFor("sidebar_link")),
    opt("theme.navbar.items.href", "url", RequiredFor("external_link")),
    opt("theme.navbar.items.position", "left|right", Lit("left")),
    opt("theme.footer.style", "light|dark", Lit("light")),
    opt("theme.footer.links", "[link group]", Lit("[]")),
    opt("theme.footer.links.title", "string", RequiredFor("link groups")),
    opt("theme.footer.links.items", "[link]", Lit("[]")),
    opt("theme.footer.links.items.label", "string", RequiredFor("links")),
    opt("theme.footer.links.items.to", "route", RequiredFor("internal links")),
    opt("theme.footer.links.items.href", "url", RequiredFor("external links")),
    opt(
        "theme.footer.copyright",
        "string",
        Derived("\"Copyright © {year} {title}.\""),
    ),
    opt(
        "theme.footer.copyright_template",
        "string",
        Derived("theme.footer.copyright"),
    ),
    opt("theme.prism.theme", "theme name", Lit("github")),
    opt("theme.prism.dark_theme", "theme name", Lit("dracula")),
];

// ============================================================================
// tests
// ============================================================================
