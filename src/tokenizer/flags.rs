//! Default flag tokenizer
//!
//! Recognises:
//! - `--name value`, `--name=value`, `--name` (boolean)
//! - `--no-name` (sets `name` to false, can be disabled)
//! - `-abc` (clustered short flags; the last one may take the next token)
//! - `-n=5`
//! - `--` (everything after it is kept verbatim)
//!
//! A flag given more than once collects its values into a list. Values are
//! inferred as booleans, numbers, or strings.
//!
//! By default the tokenizer knows nothing about option types, so a flag
//! followed by a plain word takes that word as its value: `git --verbose
//! push` reads as `verbose = "push"` with `git` as the only positional.
//! With [`FlagTokenizer::with_typed_switches`] the names listed in
//! [`TokenizerOptions::booleans`] never take a value.

use crate::domain::Value;
use crate::error::TokenizeError;
use crate::tokenizer::{Tokenized, Tokenizer, TokenizerOptions, POSITIONAL_KEY, SEPARATOR_KEY};

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::slice::Iter;

/// Flag tokenizer without type information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTokenizer {
    parse_numbers: bool,
    boolean_negation: bool,
    typed_switches: bool,
}

impl FlagTokenizer {
    pub fn new() -> Self {
        Self {
            parse_numbers: true,
            boolean_negation: true,
            typed_switches: false,
        }
    }

    /// Infer integers and floats from values
    pub fn with_parse_numbers(mut self, enabled: bool) -> Self {
        self.parse_numbers = enabled;
        self
    }

    /// Treat `--no-name` as `name = false`
    pub fn with_boolean_negation(mut self, enabled: bool) -> Self {
        self.boolean_negation = enabled;
        self
    }

    /// Never give a value to flags listed in [`TokenizerOptions::booleans`]
    pub fn with_typed_switches(mut self, enabled: bool) -> Self {
        self.typed_switches = enabled;
        self
    }

    fn infer(&self, raw: &str) -> Value {
        Value::infer(raw, self.parse_numbers)
    }

    /// Consume the next token as the value of `key` unless it looks like a
    /// flag or `key` is a switch
    fn take_value(
        &self,
        key: &str,
        options: &TokenizerOptions,
        tokens: &mut Peekable<Iter<'_, String>>,
    ) -> Value {
        if self.typed_switches && options.booleans.contains(key) {
            return Value::Bool(true);
        }

        match tokens.peek() {
            Some(next) if !is_flag_like(next) => {
                let value = self.infer(next);
                tokens.next();
                value
            }
            _ => Value::Bool(true),
        }
    }
}

impl Default for FlagTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for FlagTokenizer {
    fn tokenize(
        &self,
        raw: &[String],
        options: &TokenizerOptions,
    ) -> Result<Tokenized, TokenizeError> {
        let mut out = Output::new(options);
        let mut positionals = Vec::new();
        let mut trailing = Vec::new();
        let mut tokens = raw.iter().peekable();

        while let Some(token) = tokens.next() {
            if token == SEPARATOR_KEY {
                trailing.extend(tokens.by_ref().cloned());
                break;
            }

            if let Some(body) = token.strip_prefix("--") {
                if body.starts_with('-') || body.starts_with('=') {
                    return Err(TokenizeError::Malformed(token.clone()));
                }

                if let Some((key, value)) = body.split_once('=') {
                    out.set(key, self.infer(value));
                } else if let Some(negated) = body
                    .strip_prefix("no-")
                    .filter(|rest| self.boolean_negation && !rest.is_empty())
                {
                    out.set(negated, Value::Bool(false));
                } else {
                    let value = self.take_value(body, options, &mut tokens);
                    out.set(body, value);
                }
                continue;
            }

            if is_short_cluster(token) {
                let body = &token[1..];
                let (letters, inline) = match body.split_once('=') {
                    Some((letters, value)) => (letters, Some(value)),
                    None => (body, None),
                };

                let chars: Vec<char> = letters.chars().collect();
                let Some((last, rest)) = chars.split_last() else {
                    return Err(TokenizeError::Malformed(token.clone()));
                };

                for c in rest {
                    out.set(&c.to_string(), Value::Bool(true));
                }

                let last = last.to_string();
                let value = match inline {
                    Some(v) => self.infer(v),
                    None => self.take_value(&last, options, &mut tokens),
                };
                out.set(&last, value);
                continue;
            }

            positionals.push(token.clone());
        }

        log::trace!(
            "tokenized {} raw tokens: {} flags, {} positionals, {} trailing",
            raw.len(),
            out.values.len(),
            positionals.len(),
            trailing.len()
        );

        let mut values = out.values;
        values.insert(POSITIONAL_KEY.to_string(), string_list(positionals));
        values.insert(SEPARATOR_KEY.to_string(), string_list(trailing));
        Ok(Tokenized::new(values))
    }
}

/// Flag mapping under construction, applying the alias table on insert
struct Output<'a> {
    options: &'a TokenizerOptions,
    values: BTreeMap<String, Value>,
}

impl<'a> Output<'a> {
    fn new(options: &'a TokenizerOptions) -> Self {
        Self {
            options,
            values: BTreeMap::new(),
        }
    }

    fn set(&mut self, key: &str, value: Value) {
        for name in self.keys_for(key) {
            match self.values.get_mut(&name) {
                Some(existing) => existing.push(value.clone()),
                None => {
                    self.values.insert(name, value.clone());
                }
            }
        }
    }

    /// Names a value given under `key` is stored as
    fn keys_for(&self, key: &str) -> Vec<String> {
        let aliases = &self.options.aliases;

        if let Some(shorts) = aliases.get(key).filter(|s| !s.is_empty()) {
            if self.options.strip_aliased {
                return vec![shorts[0].clone()];
            }
            let mut names = vec![key.to_string()];
            names.extend(shorts.iter().cloned());
            return names;
        }

        if !self.options.strip_aliased {
            let mut names = vec![key.to_string()];
            for (long, shorts) in aliases {
                if shorts.iter().any(|s| s == key) {
                    names.push(long.clone());
                }
            }
            return names;
        }

        vec![key.to_string()]
    }
}

fn string_list(tokens: Vec<String>) -> Value {
    Value::List(tokens.into_iter().map(Value::String).collect())
}

fn is_negative_number(token: &str) -> bool {
    token
        .strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.parse::<f64>().is_ok())
}

fn is_short_cluster(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !is_negative_number(token)
}

fn is_flag_like(token: &str) -> bool {
    token == SEPARATOR_KEY || token.starts_with("--") || is_short_cluster(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::AliasTable;

    fn raw(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn tokenize(line: &str) -> Tokenized {
        FlagTokenizer::new()
            .tokenize(&raw(line), &TokenizerOptions::default())
            .unwrap()
    }

    #[test]
    fn test_positionals_and_flags() {
        let out = tokenize("one two three -i --foo bar");
        assert_eq!(out.positionals(), vec!["one", "two", "three"]);
        assert_eq!(out.get("i"), Some(&Value::Bool(true)));
        assert_eq!(out.get("foo"), Some(&Value::from("bar")));
    }

    #[test]
    fn test_equals_and_numbers() {
        let out = tokenize("--count=3 --ratio 0.5 -n=-2");
        assert_eq!(out.get("count"), Some(&Value::Integer(3)));
        assert_eq!(out.get("ratio"), Some(&Value::Float(0.5)));
        assert_eq!(out.get("n"), Some(&Value::Integer(-2)));
    }

    #[test]
    fn test_parse_numbers_disabled() {
        let out = FlagTokenizer::new()
            .with_parse_numbers(false)
            .tokenize(&raw("--count 3"), &TokenizerOptions::default())
            .unwrap();
        assert_eq!(out.get("count"), Some(&Value::from("3")));
    }

    #[test]
    fn test_short_cluster() {
        let out = tokenize("-abc file");
        assert_eq!(out.get("a"), Some(&Value::Bool(true)));
        assert_eq!(out.get("b"), Some(&Value::Bool(true)));
        assert_eq!(out.get("c"), Some(&Value::from("file")));
        assert!(out.positionals().is_empty());
    }

    #[test]
    fn test_negation() {
        let out = tokenize("--no-color");
        assert_eq!(out.get("color"), Some(&Value::Bool(false)));

        let out = FlagTokenizer::new()
            .with_boolean_negation(false)
            .tokenize(&raw("--no-color"), &TokenizerOptions::default())
            .unwrap();
        assert_eq!(out.get("no-color"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_separator() {
        let out = tokenize("run -- --not-a-flag x");
        assert_eq!(out.positionals(), vec!["run"]);
        assert_eq!(out.trailing(), vec!["--not-a-flag", "x"]);
        assert_eq!(out.get("not-a-flag"), None);
    }

    #[test]
    fn test_negative_number_is_positional() {
        let out = tokenize("add -5");
        assert_eq!(out.positionals(), vec!["add", "-5"]);
    }

    #[test]
    fn test_repeated_flag_collects_list() {
        let out = tokenize("--tag a --tag b");
        assert_eq!(
            out.get("tag"),
            Some(&Value::List(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn test_strip_aliased_uses_short_key() {
        let mut aliases = AliasTable::new();
        aliases.insert("foo".to_string(), vec!["f".to_string()]);
        let options = TokenizerOptions::with_aliases(aliases);

        let out = FlagTokenizer::new()
            .tokenize(&raw("--foo bar"), &options)
            .unwrap();
        let flags = out.into_flags();
        assert_eq!(flags.get("f"), Some(&Value::from("bar")));
        assert_eq!(flags.get("foo"), None);
    }

    #[test]
    fn test_aliases_without_strip_store_every_name() {
        let mut aliases = AliasTable::new();
        aliases.insert("verbose".to_string(), vec!["v".to_string()]);
        let options = TokenizerOptions {
            aliases,
            strip_aliased: false,
            ..TokenizerOptions::default()
        };

        let out = FlagTokenizer::new().tokenize(&raw("-v"), &options).unwrap();
        assert_eq!(out.get("v"), Some(&Value::Bool(true)));
        assert_eq!(out.get("verbose"), Some(&Value::Bool(true)));
    }

    fn switches(names: &[&str]) -> TokenizerOptions {
        TokenizerOptions::default().with_booleans(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_switches_take_values_by_default() {
        let out = FlagTokenizer::new()
            .tokenize(&raw("git --verbose push"), &switches(&["verbose"]))
            .unwrap();
        assert_eq!(out.positionals(), vec!["git"]);
        assert_eq!(out.get("verbose"), Some(&Value::from("push")));
    }

    #[test]
    fn test_typed_switches_never_take_values() {
        let tokenizer = FlagTokenizer::new().with_typed_switches(true);

        let out = tokenizer
            .tokenize(&raw("git --verbose push -f origin"), &switches(&["verbose", "f"]))
            .unwrap();
        assert_eq!(out.positionals(), vec!["git", "push", "origin"]);
        assert_eq!(out.get("verbose"), Some(&Value::Bool(true)));
        assert_eq!(out.get("f"), Some(&Value::Bool(true)));

        let out = tokenizer
            .tokenize(&raw("--depth 3 -vn 2"), &switches(&["v"]))
            .unwrap();
        assert_eq!(out.get("depth"), Some(&Value::Integer(3)));
        assert_eq!(out.get("n"), Some(&Value::Integer(2)));
        assert!(out.positionals().is_empty());
    }

    #[test]
    fn test_typed_switch_inline_value_kept() {
        let out = FlagTokenizer::new()
            .with_typed_switches(true)
            .tokenize(&raw("--color=false"), &switches(&["color"]))
            .unwrap();
        assert_eq!(out.get("color"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_malformed_long_flag() {
        let result =
            FlagTokenizer::new().tokenize(&raw("---x"), &TokenizerOptions::default());
        assert!(matches!(result, Err(TokenizeError::Malformed(_))));
    }

    #[test]
    fn test_reserved_keys_always_present() {
        let out = tokenize("--x");
        assert_eq!(out.get(POSITIONAL_KEY), Some(&Value::List(vec![])));
        assert_eq!(out.get(SEPARATOR_KEY), Some(&Value::List(vec![])));
    }
}
