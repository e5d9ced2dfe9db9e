//! The mapping a command handler receives

use crate::domain::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Parsed input handed to a handler
///
/// `flags` is the tokenizer's flag mapping with the reserved keys removed.
/// `params` holds leftover positional tokens bound to the command's params.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arguments {
    flags: BTreeMap<String, Value>,
    params: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trailing: Vec<String>,
}

impl Arguments {
    pub fn new(
        flags: BTreeMap<String, Value>,
        params: BTreeMap<String, Value>,
        trailing: Vec<String>,
    ) -> Self {
        Self {
            flags,
            params,
            trailing,
        }
    }

    /// Look up a flag, then a param, by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.flags.get(key).or_else(|| self.params.get(key))
    }

    pub fn flag(&self, key: &str) -> Option<&Value> {
        self.flags.get(key)
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// True if a boolean flag was given as `true`
    pub fn is_set(&self, key: &str) -> bool {
        matches!(self.flags.get(key), Some(Value::Bool(true)))
    }

    pub fn flags(&self) -> &BTreeMap<String, Value> {
        &self.flags
    }

    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    /// Tokens that followed a `--` separator
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.params.is_empty() && self.trailing.is_empty()
    }
}
