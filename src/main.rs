//! clitree - inspect declarative command trees
//!
//! Prints usage text for commands of a tree definition and shows how raw
//! arguments resolve and parse against it.

use clap::Parser;
use clitree::cli::args::{generate_completions, Cli, Commands};
use clitree::commands::{run_parse, run_resolve, run_usage};
use clitree::config::{Config, ConfigBuilder};
use clitree::error::{AppError, ConfigError};
use clitree::logging;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let builder = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_verbose(cli.verbose.then_some(true))
        .with_definition(cli.definition.clone())
        .with_indent(cli.usage_indent());
    let warnings = builder.warnings().to_vec();
    let config = builder.build();

    // Initialize logging once the verbose setting is known
    logging::init(&config);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    // Run the appropriate command
    let result = run(&cli, &config);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Commands::Usage(args) => run_usage(args, config, cli.format),

        Commands::Resolve(args) => run_resolve(args, config, cli.format),

        Commands::Parse(args) => run_parse(args, config, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::InvalidValue { key, .. }) if key == "general.definition" => {
            eprintln!();
            eprintln!("Hint: Pass a tree with --definition <FILE>, set CLITREE_DEFINITION,");
            eprintln!("      or add `definition = \"...\"` under [general] in clitree.toml.");
        }
        AppError::UnknownPath(_) => {
            eprintln!();
            eprintln!("Hint: Run 'clitree usage' to list the commands of the root.");
        }
        _ => {}
    }
}
