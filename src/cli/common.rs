//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::args::{CONFIG_FILE, Cli, ResolveArgs};
use crate::config::{SiteConfig, find_config_file, init_config};
use crate::debug;

/// Locate the configuration file.
///
/// An explicit `-C/--config` path is used as given; otherwise `site.toml` is
/// searched upward from the working directory.
pub fn locate_config(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(path.clone());
    }

    match find_config_file(Path::new(CONFIG_FILE)) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found. Run 'docsite init' to create one.",
            CONFIG_FILE
        ),
    }
}

/// Load, resolve and validate the configuration, then install it globally.
pub fn load_config(cli: &Cli, args: &ResolveArgs) -> Result<&'static SiteConfig> {
    let path = locate_config(cli)?;
    let ctx = args.context();
    debug!("config"; "loading {} (year {})", path.display(), ctx.year);

    let config = SiteConfig::load(&path, args.overrides(), ctx)
        .with_context(|| format!("Failed to load config '{}'", path.display()))?;
    debug!("config"; "site url: {}", config.site_url());

    Ok(init_config(config)?)
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    use std::io::Write;

    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}")?;
            Ok(())
        }
    }
}
