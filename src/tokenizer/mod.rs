//! Tokenizer abstraction
//!
//! A tokenizer turns a raw argument list into a flag mapping. The command
//! tree only depends on the [`Tokenizer`] trait; [`FlagTokenizer`] is the
//! default implementation.

pub mod flags;

pub use flags::FlagTokenizer;

use crate::domain::Value;
use crate::error::TokenizeError;
use std::collections::{BTreeMap, BTreeSet};

/// Reserved key holding the positional tokens
pub const POSITIONAL_KEY: &str = "_";

/// Reserved key holding the tokens after a `--` separator
pub const SEPARATOR_KEY: &str = "--";

/// Long flag name -> short synonyms
pub type AliasTable = BTreeMap<String, Vec<String>>;

/// Per-call tokenizer input besides the raw tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Long names and their short synonyms
    pub aliases: AliasTable,
    /// Store aliased values only under the canonical short id
    pub strip_aliased: bool,
    /// Flag names declared as switches; a tokenizer may refuse to give
    /// them a value
    pub booleans: BTreeSet<String>,
}

impl TokenizerOptions {
    pub fn with_aliases(aliases: AliasTable) -> Self {
        Self {
            aliases,
            strip_aliased: true,
            booleans: BTreeSet::new(),
        }
    }

    pub fn with_booleans(mut self, booleans: BTreeSet<String>) -> Self {
        self.booleans = booleans;
        self
    }
}

/// Trait for anything that can split raw arguments into flags
///
/// Implementations must place the positional tokens under
/// [`POSITIONAL_KEY`] and tokens following `--` under [`SEPARATOR_KEY`],
/// both as [`Value::List`] of strings.
pub trait Tokenizer: Send + Sync {
    fn tokenize(
        &self,
        raw: &[String],
        options: &TokenizerOptions,
    ) -> Result<Tokenized, TokenizeError>;
}

/// Tokenizer output: a flag mapping that includes the reserved keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized(BTreeMap<String, Value>);

impl Tokenized {
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Self(values)
    }

    /// Positional tokens in input order
    pub fn positionals(&self) -> Vec<String> {
        self.string_list(POSITIONAL_KEY)
    }

    /// Tokens after the `--` separator
    pub fn trailing(&self) -> Vec<String> {
        self.string_list(SEPARATOR_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The flag mapping with both reserved keys removed
    pub fn into_flags(mut self) -> BTreeMap<String, Value> {
        self.0.remove(POSITIONAL_KEY);
        self.0.remove(SEPARATOR_KEY);
        self.0
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::List(items)) => items.iter().map(|v| v.to_string()).collect(),
            Some(other) => vec![other.to_string()],
            None => Vec::new(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Tokenized {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self(values)
    }
}
