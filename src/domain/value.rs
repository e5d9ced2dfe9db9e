//! Value types shared by descriptors and the tokenizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an option value or positional param
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Boolean,
    String,
    Integer,
    Float,
}

impl ValueType {
    /// The lowercase word used in usage text
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
        }
    }

    /// Convert a raw token to this type
    ///
    /// Tokens that do not parse are kept as strings; nothing here rejects input.
    pub fn coerce(&self, raw: &str) -> Value {
        match self {
            ValueType::Boolean => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(raw.to_string()),
            },
            ValueType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            ValueType::Float => raw
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            ValueType::String => Value::String(raw.to_string()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed flag or param value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// Infer a value from a raw token: booleans, then numbers, then string
    pub fn infer(raw: &str, parse_numbers: bool) -> Self {
        match raw {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }

        if parse_numbers && looks_numeric(raw) {
            if let Ok(i) = raw.parse::<i64>() {
                return Value::Integer(i);
            }
            if let Ok(f) = raw.parse::<f64>() {
                return Value::Float(f);
            }
        }

        Value::String(raw.to_string())
    }

    /// Append another value, turning this one into a list if needed
    pub fn push(&mut self, value: Value) {
        match self {
            Value::List(items) => items.push(value),
            other => {
                let first = std::mem::replace(other, Value::List(Vec::with_capacity(2)));
                if let Value::List(items) = other {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

// Rejects words like "inf" and "NaN" that f64::from_str accepts.
fn looks_numeric(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Boolean.to_string(), "boolean");
        assert_eq!(ValueType::Integer.to_string(), "integer");
    }

    #[test]
    fn test_value_type_serde_lowercase() {
        let json = serde_json::to_string(&ValueType::Float).unwrap();
        assert_eq!(json, "\"float\"");
        let parsed: ValueType = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(parsed, ValueType::String);
    }

    #[test]
    fn test_infer() {
        assert_eq!(Value::infer("42", true), Value::Integer(42));
        assert_eq!(Value::infer("-3", true), Value::Integer(-3));
        assert_eq!(Value::infer("2.5", true), Value::Float(2.5));
        assert_eq!(Value::infer("true", true), Value::Bool(true));
        assert_eq!(Value::infer("inf", true), Value::from("inf"));
        assert_eq!(Value::infer("42", false), Value::from("42"));
    }

    #[test]
    fn test_coerce_keeps_unparseable_tokens() {
        assert_eq!(ValueType::Integer.coerce("7"), Value::Integer(7));
        assert_eq!(ValueType::Integer.coerce("seven"), Value::from("seven"));
        assert_eq!(ValueType::Float.coerce("1.5"), Value::Float(1.5));
        assert_eq!(ValueType::String.coerce("7"), Value::from("7"));
    }

    #[test]
    fn test_push_builds_list() {
        let mut value = Value::from("a");
        value.push(Value::from("b"));
        value.push(Value::from("c"));
        assert_eq!(
            value,
            Value::List(vec![Value::from("a"), Value::from("b"), Value::from("c")])
        );
    }

    #[test]
    fn test_untagged_json() {
        let json = serde_json::to_string(&Value::List(vec![1i64.into(), true.into()])).unwrap();
        assert_eq!(json, "[1,true]");
    }
}
