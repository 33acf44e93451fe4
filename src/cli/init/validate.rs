//! Pre-initialization validation.
//!
//! Validates target directory state before writing site.toml.

use anyhow::{Result, bail};
use std::path::Path;

use crate::cli::args::CONFIG_FILE;

/// Validate target directory for initialization.
///
/// # Rules
/// - the target must be a directory (or not exist yet)
/// - the target must not already contain a site.toml
pub fn validate_target(root: &Path) -> Result<()> {
    if root.exists() && !root.is_dir() {
        bail!("'{}' exists and is not a directory.", root.display());
    }

    let config = root.join(CONFIG_FILE);
    if config.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or use `docsite init --dry` to print the template.",
            config.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path()).is_ok());
    }

    #[test]
    fn test_non_existing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("new_site")).is_ok());
    }

    #[test]
    fn test_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.toml"), "title = \"Mine\"").unwrap();
        let err = validate_target(temp.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_target_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "content").unwrap();
        assert!(validate_target(&file).is_err());
    }
}
