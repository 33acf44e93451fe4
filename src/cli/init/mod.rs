//! Site initialization module.
//!
//! Writes a starter configuration for a new documentation site.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::Path;

/// Create a starter site.toml in `name` (or the current directory).
///
/// If `dry_run` is true, only prints the config template to stdout.
/// An existing site.toml is never overwritten.
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    init_at(&root)?;
    log!("init"; "wrote {}", root.join(crate::cli::args::CONFIG_FILE).display());
    Ok(())
}

fn init_at(root: &Path) -> Result<()> {
    validate::validate_target(root)?;
    config::write_config(root)
}
