//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::Config;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Files that fail to load are skipped. One message per skipped file
    /// is returned next to the config, since this runs before logging is
    /// set up.
    pub fn load_default() -> (Option<Config>, Vec<String>) {
        Self::load_first(Self::default_paths())
    }

    fn load_first(paths: Vec<PathBuf>) -> (Option<Config>, Vec<String>) {
        let mut skipped = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => return (Some(config), skipped),
                Err(e) => skipped.push(format!("Ignoring config {}: {}", path.display(), e)),
            }
        }

        (None, skipped)
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/clitree/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("clitree/config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("clitree.toml"));
        paths.push(PathBuf::from(".clitree.toml"));

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_paths_not_empty() {
        let paths = ConfigFile::default_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().any(|p| p.ends_with("clitree.toml")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigFile::load("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\ndefinition = \"tree.toml\"\n\n[usage]\nindent = 2").unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.general.definition.as_deref(), Some("tree.toml"));
        assert_eq!(config.usage.indent, 2);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[usage\nindent = ").unwrap();

        let result = ConfigFile::load(file.path());
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_load_first_skips_bad_files() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "[usage]\ncolumn_gap = 0").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[usage]\nindent = 6").unwrap();

        let (config, skipped) = ConfigFile::load_first(vec![
            PathBuf::from("/nonexistent/clitree.toml"),
            bad.path().to_path_buf(),
            good.path().to_path_buf(),
        ]);

        assert_eq!(config.map(|c| c.usage.indent), Some(6));
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].starts_with("Ignoring config"));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[usage]\ncolumn_gap = 0").unwrap();

        let result = ConfigFile::load(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
