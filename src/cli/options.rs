//! `docsite options`: list the option schema.

use std::io::Write;

use anyhow::Result;

use crate::config::section::theme::prism::KNOWN_THEMES;
use crate::config::{OPTIONS, OptionSpec};

/// Print every recognized option as an aligned table, followed by the
/// accepted `theme.prism` names.
pub fn print_options() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_table(&mut stdout, OPTIONS)?;
    writeln!(stdout)?;
    write_themes(&mut stdout, KNOWN_THEMES)
}

fn write_table(out: &mut impl Write, specs: &[OptionSpec]) -> Result<()> {
    let key_width = specs.iter().map(|s| s.key.len()).max().unwrap_or(0);
    let kind_width = specs.iter().map(|s| s.kind.len()).max().unwrap_or(0);

    for spec in specs {
        writeln!(
            out,
            "{:key_width$}  {:kind_width$}  {}",
            spec.key,
            spec.kind,
            spec.default.describe()
        )?;
    }
    Ok(())
}

fn write_themes(out: &mut impl Write, themes: &[&str]) -> Result<()> {
    writeln!(out, "theme.prism.theme / theme.prism.dark_theme:")?;
    for name in themes {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
