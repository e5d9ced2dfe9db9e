//! Option (flag) descriptor
//!
//! An option is identified by its short id. The long id is optional and is
//! only used for alias generation and display.

use crate::domain::ValueType;
use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};

/// Descriptor of a flag such as `-v` / `--verbose`
///
/// Validated on construction: the short id must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOption")]
pub struct CliOption {
    short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    long: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    required: bool,
}

impl CliOption {
    /// Create a boolean, optional option with the given short id
    ///
    /// # Errors
    /// Returns `DefinitionError::EmptyOptionShort` if `short` is empty
    pub fn new(short: impl Into<String>) -> Result<Self, DefinitionError> {
        let short = short.into();
        if short.is_empty() {
            return Err(DefinitionError::EmptyOptionShort);
        }

        Ok(Self {
            short,
            long: None,
            description: String::new(),
            value_type: ValueType::Boolean,
            required: false,
        })
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        let long = long.into();
        self.long = (!long.is_empty()).then_some(long);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[inline]
    pub fn short(&self) -> &str {
        &self.short
    }

    #[inline]
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// True for a boolean option that is not required
    ///
    /// These are the options grouped as `[-abc]` in the usage line.
    pub fn is_switch(&self) -> bool {
        self.value_type == ValueType::Boolean && !self.required
    }
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
struct RawOption {
    short: String,
    #[serde(default)]
    long: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "type")]
    value_type: ValueType,
    #[serde(default)]
    required: bool,
}

impl TryFrom<RawOption> for CliOption {
    type Error = DefinitionError;

    fn try_from(raw: RawOption) -> Result<Self, Self::Error> {
        let mut option = CliOption::new(raw.short)?
            .with_description(raw.description)
            .with_type(raw.value_type)
            .required(raw.required);
        if let Some(long) = raw.long {
            option = option.with_long(long);
        }
        Ok(option)
    }
}
