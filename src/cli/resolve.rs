//! `docsite resolve`: print the resolved configuration.

use std::path::Path;

use anyhow::Result;

use super::args::{Cli, ResolveArgs};
use super::common::{load_config, write_output};
use crate::config::SiteConfig;
use crate::log;

/// Resolve the configuration and write it as JSON.
pub fn resolve_config(
    cli: &Cli,
    args: &ResolveArgs,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(cli, args)?;
    write_output(&to_json(config, pretty)?, output)?;

    if let Some(path) = output {
        log!("resolve"; "wrote {}", path.display());
    }
    Ok(())
}

fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
