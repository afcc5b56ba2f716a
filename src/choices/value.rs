//! The value side of a choice entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A choice value: an auto-assigned integer or a caller-supplied string.
///
/// Serializes untagged, so a form layer sees the raw value (`1` or
/// `"AMEX"`), not a variant wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Int(i64),
    Str(String),
}

impl ChoiceValue {
    /// The integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ChoiceValue::Int(v) => Some(*v),
            ChoiceValue::Str(_) => None,
        }
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ChoiceValue::Int(_) => None,
            ChoiceValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Int(v) => write!(f, "{v}"),
            ChoiceValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ChoiceValue {
    fn from(v: i64) -> Self {
        ChoiceValue::Int(v)
    }
}

impl From<i32> for ChoiceValue {
    fn from(v: i32) -> Self {
        ChoiceValue::Int(v.into())
    }
}

impl From<&str> for ChoiceValue {
    fn from(s: &str) -> Self {
        ChoiceValue::Str(s.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(s: String) -> Self {
        ChoiceValue::Str(s)
    }
}

impl PartialEq<i64> for ChoiceValue {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, ChoiceValue::Int(v) if v == other)
    }
}

impl PartialEq<ChoiceValue> for i64 {
    fn eq(&self, other: &ChoiceValue) -> bool {
        other == self
    }
}

impl PartialEq<str> for ChoiceValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, ChoiceValue::Str(s) if s == other)
    }
}

impl PartialEq<&str> for ChoiceValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for ChoiceValue {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<ChoiceValue> for &str {
    fn eq(&self, other: &ChoiceValue) -> bool {
        other == self
    }
}
