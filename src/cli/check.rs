//! `docsite check`: validate the configuration.

use anyhow::Result;

use super::args::{Cli, ResolveArgs};
use super::common::load_config;
use crate::config::SiteConfig;
use crate::log;

/// Load the configuration and report a one-line summary.
///
/// Load errors propagate to `main`, which prints them with their hint.
pub fn check_config(cli: &Cli, args: &ResolveArgs) -> Result<()> {
    let config = load_config(cli, args)?;
    log!("check"; "{}", summary(config));
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    let versions = config.preset.docs.versions.len();
    format!(
        "`{}` is valid: {} ({} locale{}, {} version{}, {} nav item{})",
        config.title,
        config.site_url(),
        config.i18n.locales.len(),
        plural(config.i18n.locales.len()),
        versions,
        plural(versions),
        config.theme.navbar.items.len(),
        plural(config.theme.navbar.items.len()),
    )
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
