//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod parse;
pub mod resolve;
pub mod usage;

pub use parse::run_parse;
pub use resolve::run_resolve;
pub use usage::run_usage;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::tree::{CommandDefinition, CommandTree};

/// Load the definition named in the config and build its tree
///
/// The tree uses the tokenizer described by the `[tokenizer]` settings.
pub fn load_tree(config: &Config) -> Result<CommandTree> {
    let path = config
        .general
        .definition
        .as_deref()
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "general.definition".to_string(),
            message: "no definition file given (use --definition)".to_string(),
        })?;

    let tree = CommandDefinition::load(path)?
        .into_tree()?
        .with_tokenizer(config.tokenizer.to_tokenizer());

    log::debug!("built tree '{}' with {} commands", tree.root().name(), tree.len());
    Ok(tree)
}
