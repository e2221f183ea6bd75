use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// The right-hand side of a condition.
///
/// Serialized untagged, so the wire carries a bare string, boolean or list.
/// There is no null variant: a condition always holds a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Flag(bool),
    List(Vec<String>),
    Text(String),
}

impl Default for ConditionValue {
    fn default() -> Self {
        ConditionValue::Text(String::new())
    }
}

impl ConditionValue {
    /// True for a list value with no entries.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, ConditionValue::List(items) if items.is_empty())
    }
}

impl From<&str> for ConditionValue {
    fn from(text: &str) -> Self {
        ConditionValue::Text(text.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(text: String) -> Self {
        ConditionValue::Text(text)
    }
}

impl From<bool> for ConditionValue {
    fn from(flag: bool) -> Self {
        ConditionValue::Flag(flag)
    }
}

impl From<Vec<String>> for ConditionValue {
    fn from(items: Vec<String>) -> Self {
        ConditionValue::List(items)
    }
}

impl From<Vec<&str>> for ConditionValue {
    fn from(items: Vec<&str>) -> Self {
        ConditionValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Flag(b) => write!(f, "{}", b),
            ConditionValue::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            ConditionValue::Text(text) => write!(f, "{}", text),
        }
    }
}
