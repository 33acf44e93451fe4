//! Configuration error types.

use super::{FieldPath, Rule};
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors.
///
/// Every variant is fatal: loading stops at the first one.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnsupportedFormat(String),

    #[error("unknown option `{key}`")]
    UnknownOption { key: String },

    #[error("missing required option `{key}`")]
    MissingRequiredOption { key: String },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("site configuration is already initialized")]
    AlreadyInitialized,
}

impl ConfigError {
    pub(crate) fn unknown(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredOption { key: key.into() }
    }

    /// Fix hint shown below the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownOption { .. } => {
                Some("check the spelling, or run `docsite options` to list recognized keys")
            }
            Self::MissingRequiredOption { .. } => Some("add the option to the config file"),
            Self::UnsupportedFormat(_) => Some("rename the file to site.toml or site.json"),
            Self::Validation(err) => Some(err.rule.hint()),
            _ => None,
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// The first rule a resolved configuration failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failed rule.
    pub rule: Rule,
    /// Concrete field path, e.g. `theme.navbar.items.2.label`.
    pub field: String,
    /// Offending value as written.
    pub value: String,
}

impl ValidationError {
    pub fn new(rule: Rule, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            rule,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Error at the rule's own field path.
    pub fn at_rule(rule: Rule, value: impl Into<String>) -> Self {
        Self::new(rule, rule.field().as_str(), value)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (got {:?})",
            FieldPath::new(&self.field),
            self.rule.message(),
            self.value
        )
    }
}

impl std::error::Error for ValidationError {}

/// Render an error with its hint for terminal output.
pub fn render_error(err: &ConfigError) -> String {
    let arrow = "→".if_supports_color(Stream::Stderr, |t| t.red());
    let mut out = format!("{arrow} {err}");
    if let Some(hint) = err.hint() {
        let label = "hint:".if_supports_color(Stream::Stderr, |t| t.yellow());
        out.push_str(&format!("\n  {label} {hint}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let unknown = ConfigError::unknown("foo");
        assert_eq!(format!("{unknown}"), "unknown option `foo`");

        let missing = ConfigError::missing("url");
        assert_eq!(format!("{missing}"), "missing required option `url`");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::at_rule(Rule::BasePath, "docs/");
        let display = format!("{err}");
        assert!(display.contains("base_path"));
        assert!(display.contains("must start and end with '/'"));
        assert!(display.contains("\"docs/\""));
    }

    #[test]
    fn test_hint_follows_rule() {
        let err = ConfigError::from(ValidationError::at_rule(Rule::UrlFormat, "example.com"));
        assert_eq!(err.hint(), Some(Rule::UrlFormat.hint()));
        assert!(ConfigError::AlreadyInitialized.hint().is_none());
    }
}
