//! Validator: fail-fast checks on a resolved [`SiteConfig`].
//!
//! Sections are checked in a fixed order and the first failing rule is
//! returned; later problems are not reported until the first is fixed.

use super::util::is_absolute_http_url;
use super::{Rule, SiteConfig, ValidationError};

/// Check a resolved configuration, returning the first failing rule.
pub fn validate(config: &SiteConfig) -> Result<(), ValidationError> {
    non_empty(Rule::Title, "title", &config.title)?;
    validate_url(&config.url)?;
    validate_base_path(&config.base_path)?;
    config.i18n.validate()?;
    config.preset.docs.validate()?;
    config.theme.validate()
}

/// # Checks
/// - absolute http(s) URL with a host
/// - no path, query or fragment (those belong in `base_path`)
fn validate_url(url_str: &str) -> Result<(), ValidationError> {
    absolute_url(Rule::UrlFormat, "url", url_str)?;

    // Parsed successfully above.
    if let Ok(parsed) = url::Url::parse(url_str) {
        let has_path = !matches!(parsed.path(), "" | "/");
        if has_path || parsed.query().is_some() || parsed.fragment().is_some() {
            return fail(Rule::UrlPath, "url", url_str);
        }
    }
    Ok(())
}

fn validate_base_path(base_path: &str) -> Result<(), ValidationError> {
    if base_path.starts_with('/') && base_path.ends_with('/') {
        Ok(())
    } else {
        Err(ValidationError::at_rule(Rule::BasePath, base_path))
    }
}

// ============================================================================
// rule helpers
// ============================================================================

pub(crate) fn fail(
    rule: Rule,
    field: impl Into<String>,
    value: impl Into<String>,
) -> Result<(), ValidationError> {
    Err(ValidationError::new(rule, field, value))
}

pub(crate) fn non_empty(
    rule: Rule,
    field: impl Into<String>,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return fail(rule, field, value);
    }
    Ok(())
}

pub(crate) fn absolute_url(
    rule: Rule,
    field: impl Into<String>,
    value: &str,
) -> Result<(), ValidationError> {
    if !is_absolute_http_url(value) {
        return fail(rule, field, value);
    }
    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;

    #[test]
    fn test_valid_minimal_config() {
        assert!(validate(&test_site_config("")).is_ok());
    }

    #[test]
    fn test_base_path_needs_both_slashes() {
        for bad in ["", "x", "/x", "x/", "docs"] {
            let mut config = test_site_config("");
            config.base_path = bad.to_string();
            let err = validate(&config).unwrap_err();
            assert_eq!(err.rule, Rule::BasePath, "accepted {bad:?}");
            assert_eq!(err.value, bad);
        }

        for good in ["/", "/x/", "/FolderFlow/docs/"] {
            let mut config = test_site_config("");
            config.base_path = good.to_string();
            assert!(validate(&config).is_ok(), "rejected {good:?}");
        }
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let config = test_site_config("[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\"]");
        let err = validate(&config).unwrap_err();
        assert_eq!(err.rule, Rule::DefaultLocale);
        assert_eq!(err.field, "i18n.default_locale");
    }

    #[test]
    fn test_url_rules() {
        let mut config = test_site_config("");
        config.url = "example.com".into();
        assert_eq!(validate(&config).unwrap_err().rule, Rule::UrlFormat);

        config.url = "ftp://example.com".into();
        assert_eq!(validate(&config).unwrap_err().rule, Rule::UrlFormat);

        config.url = "https://example.com/docs".into();
        assert_eq!(validate(&config).unwrap_err().rule, Rule::UrlPath);

        config.url = "https://example.com?lang=en".into();
        assert_eq!(validate(&config).unwrap_err().rule, Rule::UrlPath);
    }

    #[test]
    fn test_reports_first_failure_only() {
        let mut config = test_site_config("");
        config.title = "  ".into();
        config.url = "nope".into();
        config.base_path = "nope".into();

        let err = validate(&config).unwrap_err();
        assert_eq!(err.rule, Rule::Title);

        config.title = "FolderFlow".into();
        assert_eq!(validate(&config).unwrap_err().rule, Rule::UrlFormat);
    }

    #[test]
    fn test_sections_are_checked() {
        let config = test_site_config(
            "[preset.docs.versions.v1]\nlabel = \"1.x\"\npath = \"v1\"",
        );
        assert_eq!(validate(&config).unwrap_err().rule, Rule::CurrentVersion);

        let config = test_site_config("[theme.prism]\ntheme = \"monokai\"");
        assert_eq!(validate(&config).unwrap_err().rule, Rule::PrismTheme);
    }
}
