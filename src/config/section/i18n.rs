//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "fr"]
//! ```

use crate::config::validate::fail;
use crate::config::{Rule, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Locale used when neither `default_locale` nor `locales` is set.
pub const DEFAULT_LOCALE: &str = "en";

static RE_LOCALE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nOptions {
    pub default_locale: Option<String>,
    pub locales: Option<Vec<String>>,
}

/// Resolved locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18nConfig {
    /// Locale served at the site root.
    pub default_locale: String,
    /// Every locale the site is built for, in declaration order.
    pub locales: Vec<String>,
}

impl I18nOptions {
    /// Fill whichever half is missing from the other.
    ///
    /// An empty `locales` list stays empty so validation can reject it.
    pub fn resolve(self) -> I18nConfig {
        match (self.default_locale, self.locales) {
            (Some(default_locale), Some(locales)) => I18nConfig {
                default_locale,
                locales,
            },
            (None, Some(locales)) => I18nConfig {
                default_locale: locales.first().cloned().unwrap_or_default(),
                locales,
            },
            (Some(default_locale), None) => I18nConfig {
                locales: vec![default_locale.clone()],
                default_locale,
            },
            (None, None) => I18nConfig {
                default_locale: DEFAULT_LOCALE.to_string(),
                locales: vec![DEFAULT_LOCALE.to_string()],
            },
        }
    }
}

impl I18nConfig {
    /// # Checks
    /// - `locales` is non-empty, well-formed, and free of duplicates
    /// - `default_locale` is listed in `locales`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.locales.is_empty() {
            return fail(Rule::LocalesEmpty, "i18n.locales", "[]");
        }

        for (i, locale) in self.locales.iter().enumerate() {
            let field = format!("i18n.locales.{i}");
            if !RE_LOCALE_CODE.is_match(locale) {
                return fail(Rule::LocaleCode, field, locale);
            }
            if self.locales[..i].contains(locale) {
                return fail(Rule::LocaleDuplicate, field, locale);
            }
        }

        if !self.locales.contains(&self.default_locale) {
            return fail(
                Rule::DefaultLocale,
                "i18n.default_locale",
                &self.default_locale,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(default_locale: Option<&str>, locales: Option<&[&str]>) -> I18nOptions {
        I18nOptions {
            default_locale: default_locale.map(String::from),
            locales: locales.map(|l| l.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_defaults_to_english() {
        let config = options(None, None).resolve();
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.locales, vec!["en"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_first_locale_is_default() {
        let config = options(None, Some(&["fr", "en"])).resolve();
        assert_eq!(config.default_locale, "fr");
    }

    #[test]
    fn test_default_locale_alone_becomes_list() {
        let config = options(Some("zh-Hans"), None).resolve();
        assert_eq!(config.locales, vec!["zh-Hans"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let config = options(Some("de"), Some(&["en", "fr"])).resolve();
        let err = config.validate().unwrap_err();
        assert_eq!(err.rule, Rule::DefaultLocale);
        assert_eq!(err.value, "de");
    }

    #[test]
    fn test_empty_locales_rejected() {
        let config = options(None, Some(&[])).resolve();
        assert_eq!(config.validate().unwrap_err().rule, Rule::LocalesEmpty);
    }

    #[test]
    fn test_malformed_and_repeated_locales() {
        let config = options(None, Some(&["en", "english language"])).resolve();
        let err = config.validate().unwrap_err();
        assert_eq!(err.rule, Rule::LocaleCode);
        assert_eq!(err.field, "i18n.locales.1");

        let config = options(None, Some(&["en", "pt-BR", "en"])).resolve();
        let err = config.validate().unwrap_err();
        assert_eq!(err.rule, Rule::LocaleDuplicate);
        assert_eq!(err.field, "i18n.locales.2");
    }
}
