//! Configuration file support.
//!
//! Loads an optional `fidustok.toml` from the scan root.

use std::path::Path;

use serde::Deserialize;

/// Config file name looked up in the first scan root.
pub const CONFIG_FILE: &str = "fidustok.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FitokConfig {
    /// Stylesheet roots scanned in addition to the CLI arguments.
    #[serde(default)]
    pub stylesheets: Vec<String>,
    /// Glob patterns for stylesheets to skip during scans.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Variable prefixes excluded from the catalog in addition to the
    /// built-in styling-framework ones.
    #[serde(default)]
    pub reserved_prefixes: Vec<String>,
    /// Default export format (`json` or `css`) when no flag is given.
    #[serde(default)]
    pub format: Option<String>,
}

impl FitokConfig {
    /// Load config from `fidustok.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[fitok][warn] failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[fitok][warn] failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp = TempDir::new().expect("tempdir");
        let config = FitokConfig::load(temp.path());
        assert!(config.stylesheets.is_empty());
        assert!(config.reserved_prefixes.is_empty());
        assert!(config.format.is_none());
    }

    #[test]
    fn test_loads_fields() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(
            temp.path().join(CONFIG_FILE),
            "stylesheets = [\"styles/globals.css\"]\nreserved_prefixes = [\"--internal-\"]\nformat = \"css\"\n",
        )
        .expect("write");

        let config = FitokConfig::load(temp.path());
        assert_eq!(config.stylesheets, vec!["styles/globals.css"]);
        assert_eq!(config.reserved_prefixes, vec!["--internal-"]);
        assert_eq!(config.format.as_deref(), Some("css"));
    }

    #[test]
    fn test_invalid_toml_falls_back_to_default() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join(CONFIG_FILE), "stylesheets = not-a-list").expect("write");

        let config = FitokConfig::load(temp.path());
        assert!(config.stylesheets.is_empty());
    }
}
