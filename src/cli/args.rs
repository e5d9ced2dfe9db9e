//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands of the `clitree`
//! inspector binary.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Inspect declarative command trees
///
/// Load a command tree from a TOML or JSON definition, print usage text for
/// any command, and see how raw arguments resolve and parse.
#[derive(Parser, Debug)]
#[command(name = "clitree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLITREE_CONFIG")]
    pub config: Option<String>,

    /// Path to the command tree definition (.toml or .json)
    #[arg(short, long, global = true, env = "CLITREE_DEFINITION")]
    pub definition: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--indent` of the usage subcommand, if given
    pub fn usage_indent(&self) -> Option<usize> {
        match &self.command {
            Commands::Usage(args) => args.indent,
            _ => None,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the usage text of a command
    Usage(UsageArgs),

    /// Show which command a list of arguments resolves to
    Resolve(TokensArgs),

    /// Show the flags and params a handler would receive
    Parse(TokensArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the usage command
#[derive(Parser, Debug)]
pub struct UsageArgs {
    /// Child names leading from the root to the command
    pub names: Vec<String>,

    /// Spaces before each section line
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Raw arguments to feed through the tree
#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Arguments as they would be typed after the program name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_usage() {
        let args = Cli::try_parse_from(["clitree", "-d", "git.toml", "usage", "remote", "add"])
            .unwrap();
        assert_eq!(args.definition.as_deref(), Some("git.toml"));
        if let Commands::Usage(usage) = args.command {
            assert_eq!(usage.names, vec!["remote", "add"]);
            assert_eq!(usage.indent, None);
        } else {
            panic!("Expected Usage command");
        }
    }

    #[test]
    fn test_usage_indent() {
        let args = Cli::try_parse_from(["clitree", "usage", "--indent", "2"]).unwrap();
        assert_eq!(args.usage_indent(), Some(2));

        let args = Cli::try_parse_from(["clitree", "resolve", "git"]).unwrap();
        assert_eq!(args.usage_indent(), None);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["clitree", "-v", "usage"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_parse_tokens_keep_hyphens() {
        let args =
            Cli::try_parse_from(["clitree", "parse", "git", "push", "-f", "--tag", "v1"]).unwrap();
        if let Commands::Parse(parse) = args.command {
            assert_eq!(parse.tokens, vec!["git", "push", "-f", "--tag", "v1"]);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_after_separator() {
        let args = Cli::try_parse_from(["clitree", "resolve", "--", "-x", "git"]).unwrap();
        if let Commands::Resolve(resolve) = args.command {
            assert_eq!(resolve.tokens, vec!["-x", "git"]);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn test_cli_format_json() {
        let args = Cli::try_parse_from(["clitree", "--format", "json", "usage"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["clitree", "--format", "yaml", "usage"]);
        assert!(result.is_err());
    }
}
