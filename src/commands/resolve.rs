//! Resolve command implementation
//!
//! Shows which command raw arguments resolve to.

use crate::cli::args::{OutputFormat, TokensArgs};
use crate::cli::output::{print_output, ResolveOutput};
use crate::commands::load_tree;
use crate::config::Config;
use crate::error::Result;
use crate::tree::CommandTree;

/// Execute the resolve command
pub fn run_resolve(args: &TokensArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let tree = load_tree(config)?;
    let output = resolve_tokens(&tree, &args.tokens)?;
    print_output(&output, format)?;
    Ok(())
}

/// Match `tokens` from the root of `tree`
pub fn resolve_tokens(tree: &CommandTree, tokens: &[String]) -> Result<ResolveOutput> {
    let matched = tree
        .resolve(tokens)?
        .map(|command| command.path().into_iter().map(String::from).collect());

    Ok(ResolveOutput {
        tokens: tokens.to_vec(),
        matched,
    })
}
