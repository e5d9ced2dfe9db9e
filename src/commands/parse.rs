//! Parse command implementation
//!
//! Shows the arguments a handler would receive for raw input.

use crate::cli::args::{OutputFormat, TokensArgs};
use crate::cli::output::{print_output, ParseOutput, ResolveOutput};
use crate::commands::load_tree;
use crate::config::Config;
use crate::error::Result;
use crate::tree::CommandTree;

/// Execute the parse command
pub fn run_parse(args: &TokensArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let tree = load_tree(config)?;

    match parse_tokens(&tree, &args.tokens)? {
        Some(output) => print_output(&output, format)?,
        None => {
            let output = ResolveOutput {
                tokens: args.tokens.clone(),
                matched: None,
            };
            print_output(&output, format)?;
        }
    }

    Ok(())
}

/// Dispatch `tokens` up to, but not including, the handler call
pub fn parse_tokens(tree: &CommandTree, tokens: &[String]) -> Result<Option<ParseOutput>> {
    let Some(dispatch) = tree.parse(tokens)? else {
        return Ok(None);
    };

    Ok(Some(ParseOutput {
        path: dispatch
            .command
            .path()
            .into_iter()
            .map(String::from)
            .collect(),
        arguments: dispatch.arguments,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::git_config;
    use crate::domain::Value;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_flags_and_params() {
        let (_file, config) = git_config();
        let tree = load_tree(&config).unwrap();

        let output = parse_tokens(&tree, &tokens("git push origin --force"))
            .unwrap()
            .unwrap();
        assert_eq!(output.path, vec!["git", "push"]);
        assert_eq!(output.arguments.flag("f"), Some(&Value::Bool(true)));
        assert_eq!(output.arguments.flag("force"), None);
        assert_eq!(output.arguments.param("remote"), Some(&Value::from("origin")));
    }

    #[test]
    fn test_parse_no_match() {
        let (_file, config) = git_config();
        let tree = load_tree(&config).unwrap();

        assert!(parse_tokens(&tree, &tokens("hg")).unwrap().is_none());
    }

    #[test]
    fn test_parse_uses_configured_tokenizer() {
        let (_file, mut config) = git_config();
        config.tokenizer.parse_numbers = false;
        let tree = load_tree(&config).unwrap();

        let output = parse_tokens(&tree, &tokens("git --depth 3")).unwrap().unwrap();
        assert_eq!(output.arguments.flag("depth"), Some(&Value::from("3")));
    }
}
