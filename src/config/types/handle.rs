//! Write-once global site configuration.
//!
//! The configuration is resolved once at start-up and never replaced.

use crate::config::{ConfigError, SiteConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Install the resolved configuration.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call; the first
/// configuration stays in place.
pub fn init_config(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    let mut installed = false;
    let stored = CONFIG.get_or_init(|| {
        installed = true;
        config
    });
    if !installed {
        return Err(ConfigError::AlreadyInitialized);
    }
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;

    #[test]
    fn test_init_config_is_write_once() {
        let first = init_config(test_site_config("")).unwrap();
        assert_eq!(first.title, "Test");

        let mut other = test_site_config("");
        other.title = "Other".into();
        assert!(matches!(
            init_config(other),
            Err(ConfigError::AlreadyInitialized)
        ));
        assert_eq!(CONFIG.get().map(|c| c.title.as_str()), Some("Test"));
    }
}
