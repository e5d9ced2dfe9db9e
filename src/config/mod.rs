//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::error::ConfigError;
use crate::tokenizer::FlagTokenizer;
use crate::tree::UsageStyle;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Usage text layout
    pub usage: UsageConfig,
    /// Default tokenizer behaviour
    pub tokenizer: TokenizerConfig,
}

impl Config {
    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.usage.column_gap == 0 {
            return Err(ConfigError::InvalidValue {
                key: "usage.column_gap".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// General configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Definition file used when none is given on the command line
    pub definition: Option<String>,
}

impl GeneralConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Usage text layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    /// Spaces before each section line
    pub indent: usize,
    /// Spaces between columns
    pub column_gap: usize,
}

impl Default for UsageConfig {
    fn default() -> Self {
        let style = UsageStyle::default();
        Self {
            indent: style.indent,
            column_gap: style.column_gap,
        }
    }
}

impl UsageConfig {
    /// Convert to a UsageStyle
    pub fn to_style(&self) -> UsageStyle {
        UsageStyle {
            indent: self.indent,
            column_gap: self.column_gap,
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Infer integers and floats from flag values
    pub parse_numbers: bool,
    /// Read `--no-name` as `name = false`
    pub boolean_negation: bool,
    /// Never let declared switches take the next word as a value
    pub typed_switches: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            parse_numbers: true,
            boolean_negation: true,
            typed_switches: false,
        }
    }
}

impl TokenizerConfig {
    /// Build the tokenizer these settings describe
    pub fn to_tokenizer(&self) -> FlagTokenizer {
        FlagTokenizer::new()
            .with_parse_numbers(self.parse_numbers)
            .with_boolean_negation(self.boolean_negation)
            .with_typed_switches(self.typed_switches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.usage.indent, 4);
        assert_eq!(config.usage.column_gap, 2);
        assert!(config.tokenizer.parse_numbers);
        assert!(config.general.definition.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[usage]\nindent = 2\n").unwrap();
        assert_eq!(config.usage.indent, 2);
        assert_eq!(config.usage.column_gap, 2);
        assert!(config.tokenizer.boolean_negation);
    }

    #[test]
    fn test_log_filter_follows_verbose() {
        let mut general = GeneralConfig::default();
        assert_eq!(general.log_filter(), "warn");
        general.verbose = true;
        assert_eq!(general.log_filter(), "debug");
    }

    #[test]
    fn test_typed_switches_from_toml() {
        let config: Config = toml::from_str("[tokenizer]\ntyped_switches = true\n").unwrap();
        assert!(config.tokenizer.typed_switches);
        assert!(!Config::default().tokenizer.typed_switches);
        assert_eq!(
            config.tokenizer.to_tokenizer(),
            FlagTokenizer::new().with_typed_switches(true)
        );
    }

    #[test]
    fn test_zero_gap_rejected() {
        let mut config = Config::default();
        config.usage.column_gap = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_usage_config_to_style() {
        let style = UsageConfig {
            indent: 1,
            column_gap: 3,
        }
        .to_style();
        assert_eq!(style.indent, 1);
        assert_eq!(style.column_gap, 3);
    }
}
