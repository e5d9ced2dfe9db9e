//! Positional param descriptor

use crate::domain::ValueType;
use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};

/// Descriptor of a positional argument
///
/// Defaults to a required, single string. Only one `multiple` param per
/// command is active: when several are flagged, the last one registered
/// takes part in the usage line and in param binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParam")]
pub struct Param {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    required: bool,
    #[serde(rename = "type")]
    value_type: ValueType,
    multiple: bool,
}

impl Param {
    /// Create a required string param
    ///
    /// # Errors
    /// Returns `DefinitionError::EmptyParamName` if `name` is empty
    pub fn new(name: impl Into<String>) -> Result<Self, DefinitionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::EmptyParamName);
        }

        Ok(Self {
            name,
            description: String::new(),
            required: true,
            value_type: ValueType::String,
            multiple: false,
        })
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

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }
}

/// The param that collects remaining tokens: the last one flagged `multiple`
pub fn active_multiple(params: &[Param]) -> Option<&Param> {
    params.iter().rev().find(|p| p.is_multiple())
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
struct RawParam {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_required")]
    required: bool,
    #[serde(default = "default_type", rename = "type")]
    value_type: ValueType,
    #[serde(default)]
    multiple: bool,
}

fn default_required() -> bool {
    true
}

fn default_type() -> ValueType {
    ValueType::String
}

impl TryFrom<RawParam> for Param {
    type Error = DefinitionError;

    fn try_from(raw: RawParam) -> Result<Self, Self::Error> {
        Ok(Param::new(raw.name)?
            .with_description(raw.description)
            .with_type(raw.value_type)
            .required(raw.required)
            .multiple(raw.multiple))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let param = Param::new("file").unwrap();
        assert!(param.is_required());
        assert!(!param.is_multiple());
        assert_eq!(param.value_type(), ValueType::String);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Param::new(""), Err(DefinitionError::EmptyParamName));
    }

    #[test]
    fn test_last_multiple_is_active() {
        let params = vec![
            Param::new("first").unwrap().multiple(true),
            Param::new("plain").unwrap(),
            Param::new("second").unwrap().multiple(true),
        ];
        assert_eq!(active_multiple(&params).unwrap().name(), "second");
        assert!(active_multiple(&params[1..2]).is_none());
    }

    #[test]
    fn test_deserialize_defaults() {
        let param: Param = serde_json::from_str(r#"{"name": "files", "multiple": true}"#).unwrap();
        assert!(param.is_required());
        assert!(param.is_multiple());
        assert_eq!(param.value_type(), ValueType::String);

        assert!(serde_json::from_str::<Param>(r#"{"name": ""}"#).is_err());
    }
}
