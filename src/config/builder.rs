//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
    warnings: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            warnings: Vec::new(),
        }
    }

    /// Load configuration from a file, or from the default locations
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = match path {
            Some(path) => match ConfigFile::load(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    self.warnings.push(e.to_string());
                    None
                }
            },
            None => {
                let (config, skipped) = ConfigFile::load_default();
                self.warnings.extend(skipped);
                config
            }
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI definition path
    pub fn with_definition(mut self, definition: Option<String>) -> Self {
        if let Some(d) = definition {
            self.config.general.definition = Some(d);
        }
        self
    }

    /// Override the usage indent
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        if let Some(i) = indent {
            self.config.usage.indent = i;
        }
        self
    }

    /// Problems met while loading files, to be logged once a logger exists
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
