//! Validation rules, in the order the validator checks them.

use super::FieldPath;
use std::fmt;

/// A single validation rule.
///
/// Each rule knows the field it guards, what it requires, and how to fix a
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Title,
    UrlFormat,
    UrlPath,
    BasePath,
    LocalesEmpty,
    LocaleCode,
    LocaleDuplicate,
    DefaultLocale,
    DocsPath,
    EditUrl,
    CurrentVersion,
    VersionLabel,
    VersionPath,
    LastVersion,
    NavLabel,
    NavSidebarId,
    NavHref,
    FooterTitle,
    FooterLabel,
    FooterRoute,
    FooterHref,
    FooterTarget,
    PrismTheme,
}

impl Rule {
    /// Stable rule identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title_non_empty",
            Self::UrlFormat => "url_absolute",
            Self::UrlPath => "url_without_path",
            Self::BasePath => "base_path_shape",
            Self::LocalesEmpty => "locales_non_empty",
            Self::LocaleCode => "locale_code",
            Self::LocaleDuplicate => "locale_unique",
            Self::DefaultLocale => "default_locale_listed",
            Self::DocsPath => "docs_path_non_empty",
            Self::EditUrl => "edit_url_absolute",
            Self::CurrentVersion => "current_version_present",
            Self::VersionLabel => "version_label_non_empty",
            Self::VersionPath => "version_path_non_empty",
            Self::LastVersion => "last_version_known",
            Self::NavLabel => "nav_label_non_empty",
            Self::NavSidebarId => "nav_sidebar_id_non_empty",
            Self::NavHref => "nav_href_absolute",
            Self::FooterTitle => "footer_title_non_empty",
            Self::FooterLabel => "footer_label_non_empty",
            Self::FooterRoute => "footer_route_rooted",
            Self::FooterHref => "footer_href_absolute",
            Self::FooterTarget => "footer_single_target",
            Self::PrismTheme => "prism_theme_known",
        }
    }

    /// Field (or field family) the rule applies to.
    pub const fn field(self) -> FieldPath<'static> {
        FieldPath::new(match self {
            Self::Title => "title",
            Self::UrlFormat | Self::UrlPath => "url",
            Self::BasePath => "base_path",
            Self::LocalesEmpty | Self::LocaleCode | Self::LocaleDuplicate => "i18n.locales",
            Self::DefaultLocale => "i18n.default_locale",
            Self::DocsPath => "preset.docs.path",
            Self::EditUrl => "preset.docs.edit_url",
            Self::CurrentVersion | Self::VersionLabel | Self::VersionPath => {
                "preset.docs.versions"
            }
            Self::LastVersion => "preset.docs.last_version",
            Self::NavLabel | Self::NavSidebarId | Self::NavHref => "theme.navbar.items",
            Self::FooterTitle
            | Self::FooterLabel
            | Self::FooterRoute
            | Self::FooterHref
            | Self::FooterTarget => "theme.footer.links",
            Self::PrismTheme => "theme.prism",
        })
    }

    /// What the rule requires, phrased after the field name.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Title => "must not be empty",
            Self::UrlFormat => "must be an absolute http(s) URL with a host",
            Self::UrlPath => "must not carry a path, query or fragment",
            Self::BasePath => "must start and end with '/'",
            Self::LocalesEmpty => "must list at least one locale",
            Self::LocaleCode => "must be a locale code such as `en` or `zh-Hans`",
            Self::LocaleDuplicate => "must not repeat a locale",
            Self::DefaultLocale => "must be one of `i18n.locales`",
            Self::DocsPath => "must not be empty",
            Self::EditUrl => "must be an absolute http(s) URL",
            Self::CurrentVersion => "must contain a `current` entry when versioning is enabled",
            Self::VersionLabel => "must not be empty",
            Self::VersionPath => "must not be empty",
            Self::LastVersion => "must name an entry of `preset.docs.versions`",
            Self::NavLabel => "must not be empty",
            Self::NavSidebarId => "must not be empty",
            Self::NavHref => "must be an absolute http(s) URL",
            Self::FooterTitle => "must not be empty",
            Self::FooterLabel => "must not be empty",
            Self::FooterRoute => "must start with '/'",
            Self::FooterHref => "must be an absolute http(s) URL",
            Self::FooterTarget => "must set exactly one of `to` and `href`",
            Self::PrismTheme => "must name a known highlighting theme",
        }
    }

    pub const fn hint(self) -> &'static str {
        match self {
            Self::Title => "set a site title, e.g. title = \"My Project\"",
            Self::UrlFormat | Self::EditUrl | Self::NavHref | Self::FooterHref => {
                "use format like https://example.com"
            }
            Self::UrlPath => "move the path into base_path, e.g. base_path = \"/project/\"",
            Self::BasePath => "wrap the path in slashes, e.g. \"/project/\" or \"/\"",
            Self::LocalesEmpty => "set locales = [\"en\"]",
            Self::LocaleCode => "use a BCP 47 tag like \"en\", \"pt-BR\" or \"zh-Hans\"",
            Self::LocaleDuplicate => "remove the repeated entry",
            Self::DefaultLocale => "add the default locale to the locales list",
            Self::DocsPath => "point docs.path at the docs directory, e.g. \"docs\"",
            Self::CurrentVersion => "add [preset.docs.versions.current] with label and path",
            Self::VersionLabel | Self::VersionPath => "give every version a label and a path",
            Self::LastVersion => "use \"current\" or the key of a configured version",
            Self::NavLabel | Self::FooterLabel => "give the link a visible label",
            Self::NavSidebarId => "use the id of a sidebar defined in the sidebars file",
            Self::FooterTitle => "give the link group a title",
            Self::FooterRoute => "use a site route such as \"/user-guide/\"",
            Self::FooterTarget => "use `to` for site routes and `href` for external URLs",
            Self::PrismTheme => "run `docsite options` to see the accepted theme names",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
