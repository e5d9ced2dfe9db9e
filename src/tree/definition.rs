//! Declarative command definitions
//!
//! A command tree can be described in TOML or JSON and turned into a
//! [`CommandTree`]. Handlers cannot be declared; attach them afterwards or
//! use the tree for matching and usage text only.
//!
//! ```toml
//! name = "git"
//! description = "Version control"
//!
//! [[options]]
//! short = "v"
//! long = "verbose"
//!
//! [[commands]]
//! name = "push"
//!
//! [[commands.params]]
//! name = "remote"
//! required = false
//! ```

use crate::domain::{CliOption, Param};
use crate::error::{ConfigError, DefinitionError, Result};
use crate::tree::{Command, CommandTree};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable shape of a command and its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CliOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandDefinition>,
}

impl CommandDefinition {
    /// Load a definition from a `.toml` or `.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let definition = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => Self::from_json(&content)?,
            other => {
                return Err(ConfigError::ParseError(format!(
                    "unsupported definition format '{}' for {}",
                    other.unwrap_or(""),
                    path.display()
                ))
                .into())
            }
        };

        log::info!("Loaded command definition from {}", path.display());
        Ok(definition)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate and build a tree rooted at this definition
    pub fn into_tree(self) -> std::result::Result<CommandTree, DefinitionError> {
        Ok(CommandTree::new(Command::try_from(self)?))
    }
}

impl TryFrom<CommandDefinition> for Command {
    type Error = DefinitionError;

    fn try_from(definition: CommandDefinition) -> std::result::Result<Self, Self::Error> {
        let children = definition
            .commands
            .into_iter()
            .map(Command::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Command::new(definition.name)?
            .with_description(definition.description)
            .add_options(definition.options)
            .add_params(definition.params)
            .add_commands(children))
    }
}
