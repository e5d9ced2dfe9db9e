//! Usage command implementation
//!
//! Prints the usage text of a command in the loaded tree.

use crate::cli::args::{OutputFormat, UsageArgs};
use crate::cli::output::{print_output, UsageOutput};
use crate::commands::load_tree;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::tree::{CommandTree, UsageStyle};

/// Execute the usage command
pub fn run_usage(args: &UsageArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let tree = load_tree(config)?;

    let output = usage_for(&tree, &args.names, &config.usage.to_style())?;
    print_output(&output, format)?;

    Ok(())
}

/// Usage text of the command reached by following `names` from the root
pub fn usage_for(tree: &CommandTree, names: &[String], style: &UsageStyle) -> Result<UsageOutput> {
    let command = tree
        .find(names)
        .ok_or_else(|| AppError::UnknownPath(names.join(" ")))?;

    Ok(UsageOutput {
        path: command.path().into_iter().map(String::from).collect(),
        usage: command.usage_with(style),
    })
}
