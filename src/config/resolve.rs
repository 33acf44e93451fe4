//! Resolver: user options merged over defaults into a [`SiteConfig`].
//!
//! Resolution is pure. The only value that depends on the outside world,
//! the year shown in the footer copyright, comes in through
//! [`ResolveContext`].

use super::schema::{self, SiteOptions};
use super::section::DEFAULT_ON_BROKEN_LINKS;
use super::util::split_url_path;
use super::{ConfigError, SiteConfig};

/// Base path used when neither `base_path` nor a URL path is given.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Values injected into resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    /// Substituted for `{year}` in the footer copyright.
    pub year: i32,
}

impl ResolveContext {
    pub const fn new(year: i32) -> Self {
        Self { year }
    }
}

/// Resolve options into a complete configuration.
///
/// Fails on missing required keys and on nav/footer entries that do not
/// match their kind. Does not validate values; see [`super::validate`].
pub fn resolve(options: SiteOptions, ctx: ResolveContext) -> Result<SiteConfig, ConfigError> {
    schema::require(&options)?;

    let SiteOptions {
        title,
        tagline,
        favicon,
        url,
        base_path,
        organization,
        project,
        on_broken_links,
        markdown,
        i18n,
        future,
        preset,
        theme,
    } = options;

    let title = title.unwrap_or_default();
    let (url, base_path) = resolve_location(url.unwrap_or_default(), base_path);
    let theme = theme.resolve(&title, ctx.year)?;

    Ok(SiteConfig {
        tagline: tagline.unwrap_or_default(),
        favicon,
        url,
        base_path,
        organization,
        project,
        on_broken_links: on_broken_links.unwrap_or(DEFAULT_ON_BROKEN_LINKS),
        markdown: markdown.resolve(),
        i18n: i18n.resolve(),
        future: future.resolve(),
        preset: preset.resolve(),
        theme,
        title,
    })
}

/// Normalize the site URL and pick the base path.
///
/// A trailing `/` on the URL is dropped. Without an explicit base path, a
/// path carried by the URL becomes the base path, unless the URL also has a
/// query or fragment; such a URL is kept whole and rejected by validation.
///
/// ```text
/// url = "https://polocto.github.io/FolderFlow/"
///   -> url = "https://polocto.github.io", base_path = "/FolderFlow/"
/// ```
fn resolve_location(url: String, base_path: Option<String>) -> (String, String) {
    let url = url.trim_end_matches('/').to_string();

    if let Some(base_path) = base_path {
        return (url, base_path);
    }

    match split_url_path(&url) {
        Some((origin, path)) if !path.is_empty() => (origin, format!("/{path}/")),
        _ => (url, DEFAULT_BASE_PATH.to_string()),
    }
}

// ============================================================================
// tests
// ============================================================================
