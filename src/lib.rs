//! clitree - command trees for command-line programs
//!
//! Commands form a tree of named nodes carrying typed options and
//! positional params. From that tree the library derives two behaviours:
//! resolving positional tokens to the deepest matching command, and
//! rendering usage text for any command.
//!
//! ```
//! use clitree::domain::{CliOption, Param};
//! use clitree::tree::{Command, CommandTree};
//!
//! let tree = CommandTree::new(
//!     Command::new("git")?.add_command(
//!         Command::new("push")?
//!             .add_option(CliOption::new("f")?.with_long("force"))
//!             .add_param(Param::new("remote")?.required(false)),
//!     ),
//! );
//!
//! let push = tree.root().matching_command(&["git", "push"]).unwrap();
//! assert!(push.usage().starts_with("Usage: git push [-f] [<remote>]"));
//! # Ok::<(), clitree::error::DefinitionError>(())
//! ```
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface of the `clitree` binary
//! - [`commands`]: Command handlers of the binary
//! - [`config`]: Configuration system
//! - [`domain`]: Option and param descriptors, parsed values
//! - [`error`]: Error types
//! - [`logging`]: Logger setup for the binary
//! - [`tokenizer`]: Tokenizer trait and default flag tokenizer
//! - [`tree`]: Command tree, matching, usage text and dispatch

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod tokenizer;
pub mod tree;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
