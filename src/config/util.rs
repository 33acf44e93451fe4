//! Configuration utility functions.

use super::ConfigError;
use std::path::{Path, PathBuf};

/// Input format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Split a URL into its origin and its path component.
///
/// The path is returned with leading/trailing slashes trimmed.
/// Returns `None` if the URL is invalid, has no host, or carries a query or
/// fragment that the split would drop.
///
/// # Examples
/// ```ignore
/// split_url_path("https://polocto.github.io/FolderFlow/") -> Some(("https://polocto.github.io", "FolderFlow"))
/// split_url_path("https://example.com")                   -> Some(("https://example.com", ""))
/// split_url_path("https://example.com:8080/a/b")          -> Some(("https://example.com:8080", "a/b"))
/// split_url_path("https://example.com/docs?lang=fr")      -> None
/// split_url_path("invalid")                               -> None
/// ```
pub fn split_url_path(url_str: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url_str).ok()?;
    parsed.host_str()?;
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return None;
    }

    let origin = parsed.origin().ascii_serialization();
    let path = parsed.path().trim_matches('/');

    Some((origin, path.to_string()))
}

/// Check that a string is an absolute http(s) URL with a host.
pub fn is_absolute_http_url(url_str: &str) -> bool {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guides/  ← cwd
/// /home/user/site/site.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_split_url_path() {
        // GitHub Pages project site
        assert_eq!(
            split_url_path("https://polocto.github.io/FolderFlow/"),
            Some(("https://polocto.github.io".to_string(), "FolderFlow".to_string()))
        );

        // Multiple path components
        assert_eq!(
            split_url_path("https://example.github.io/a/b/c"),
            Some(("https://example.github.io".to_string(), "a/b/c".to_string()))
        );

        // Root path
        assert_eq!(
            split_url_path("https://example.com"),
            Some(("https://example.com".to_string(), String::new()))
        );

        // Invalid URL (no scheme)
        assert_eq!(split_url_path("invalid-url"), None);
    }

    #[test]
    fn test_split_url_path_edge_cases() {
        // Non-default port is part of the origin
        assert_eq!(
            split_url_path("https://example.com:8080/path"),
            Some(("https://example.com:8080".to_string(), "path".to_string()))
        );

        // Query or fragment would be lost by the split
        assert_eq!(split_url_path("https://example.com/path?query=1"), None);
        assert_eq!(split_url_path("https://example.com/path#top"), None);

        // No host
        assert_eq!(split_url_path("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_is_absolute_http_url() {
        assert!(is_absolute_http_url("https://github.com/polocto/FolderFlow"));
        assert!(is_absolute_http_url("http://localhost:3000"));
        assert!(!is_absolute_http_url("ftp://example.com"));
        assert!(!is_absolute_http_url("/relative/path"));
        assert!(!is_absolute_http_url("example.com"));
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/site.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("docusaurus.config.ts")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/guides");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, temp.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-site.toml")).is_none());
    }
}
