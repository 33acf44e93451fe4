//! Broken-link policies and `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! on_broken_links = "error"
//!
//! [markdown.hooks]
//! on_broken_markdown_links = "warn"
//! ```

use serde::{Deserialize, Serialize};

/// How the renderer reacts to a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    /// Ignore silently.
    Ignore,
    /// Report and keep building.
    Warn,
    /// Fail the build.
    #[serde(alias = "throw")]
    Error,
}

/// Default for `on_broken_links`.
pub const DEFAULT_ON_BROKEN_LINKS: ReportingSeverity = ReportingSeverity::Error;

/// Default for `markdown.hooks.on_broken_markdown_links`.
pub const DEFAULT_ON_BROKEN_MARKDOWN_LINKS: ReportingSeverity = ReportingSeverity::Warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    pub hooks: MarkdownHooksOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownHooksOptions {
    pub on_broken_markdown_links: Option<ReportingSeverity>,
}

/// Resolved Markdown processing policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownConfig {
    pub hooks: MarkdownHooks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownHooks {
    /// Reaction to a Markdown link whose target file does not exist.
    pub on_broken_markdown_links: ReportingSeverity,
}

impl MarkdownOptions {
    pub fn resolve(self) -> MarkdownConfig {
        MarkdownConfig {
            hooks: MarkdownHooks {
                on_broken_markdown_links: self
                    .hooks
                    .on_broken_markdown_links
                    .unwrap_or(DEFAULT_ON_BROKEN_MARKDOWN_LINKS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_accepts_throw() {
        let parsed: ReportingSeverity = serde_json::from_str("\"throw\"").unwrap();
        assert_eq!(parsed, ReportingSeverity::Error);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"error\"");
    }

    #[test]
    fn test_markdown_defaults() {
        let config = MarkdownOptions::default().resolve();
        assert_eq!(
            config.hooks.on_broken_markdown_links,
            ReportingSeverity::Warn
        );
    }
}
