//! Dispatch: resolve a command, tokenize its flags, call its handler
//!
//! Required options and params are not checked here; a missing value is
//! simply absent from the [`Arguments`] the handler receives.

use crate::domain::{active_multiple, Arguments, Param, Value};
use crate::error::{AppError, Result};
use crate::tokenizer::TokenizerOptions;
use crate::tree::{CommandRef, CommandTree};

use std::collections::BTreeMap;

/// A resolved command together with its parsed arguments
#[derive(Debug)]
pub struct Dispatch<'a> {
    pub command: CommandRef<'a>,
    pub arguments: Arguments,
}

impl Dispatch<'_> {
    /// Call the command's handler and return its value unchanged
    ///
    /// # Errors
    /// Returns `AppError::MissingHandler` if the command has no handler, or
    /// whatever the handler itself returns.
    pub fn invoke(&self) -> Result<serde_json::Value> {
        let handler = self
            .command
            .handler()
            .ok_or_else(|| AppError::MissingHandler(self.command.path().join(" ")))?;

        log::debug!("running '{}'", self.command.path().join(" "));
        handler(&self.arguments)
    }
}

impl<'a> CommandRef<'a> {
    /// Resolve `raw` from this command and parse its flags and params
    ///
    /// Returns `Ok(None)` when no command matches.
    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Result<Option<Dispatch<'a>>> {
        let raw: Vec<String> = raw.iter().map(|s| s.as_ref().to_string()).collect();
        let tokenizer = self.tree().tokenizer();

        let positionals = tokenizer
            .tokenize(&raw, &self.tree().matching_options())?
            .positionals();

        let Some((command, consumed)) = self.match_depth(&positionals) else {
            log::debug!("no command matches {:?}", positionals);
            return Ok(None);
        };

        let options =
            TokenizerOptions::with_aliases(command.aliases()).with_booleans(command.switches());
        let tokenized = tokenizer.tokenize(&raw, &options)?;
        let positionals = tokenized.positionals();
        let trailing = tokenized.trailing();
        let flags = tokenized.into_flags();
        let params = bind_params(command.params(), positionals.get(consumed..).unwrap_or(&[]));

        log::debug!(
            "dispatching '{}' with {} flags, {} params",
            command.path().join(" "),
            flags.len(),
            params.len()
        );

        Ok(Some(Dispatch {
            command,
            arguments: Arguments::new(flags, params, trailing),
        }))
    }

    /// Resolve `raw` from this command and run the matched handler
    ///
    /// Returns `Ok(None)` without calling anything when no command matches.
    pub fn run<S: AsRef<str>>(&self, raw: &[S]) -> Result<Option<serde_json::Value>> {
        match self.parse(raw)? {
            Some(dispatch) => dispatch.invoke().map(Some),
            None => Ok(None),
        }
    }
}

impl CommandTree {
    /// [`CommandRef::parse`] from the root
    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Result<Option<Dispatch<'_>>> {
        self.root().parse(raw)
    }

    /// [`CommandRef::run`] from the root
    pub fn run<S: AsRef<str>>(&self, raw: &[S]) -> Result<Option<serde_json::Value>> {
        self.root().run(raw)
    }
}

/// Bind leftover positional tokens to params in registration order
///
/// Single-value params take one token each; the active multiple param
/// takes whatever remains.
fn bind_params(params: &[Param], tokens: &[String]) -> BTreeMap<String, Value> {
    let mut bound = BTreeMap::new();
    let mut tokens = tokens.iter();

    for param in params.iter().filter(|p| !p.is_multiple()) {
        let Some(token) = tokens.next() else {
            break;
        };
        bound.insert(param.name().to_string(), param.value_type().coerce(token));
    }

    if let Some(multiple) = active_multiple(params) {
        let rest: Vec<Value> = tokens.map(|t| multiple.value_type().coerce(t)).collect();
        if !rest.is_empty() {
            bound.insert(multiple.name().to_string(), Value::List(rest));
        }
    }

    bound
}
