use crate::error::CodecError;
use crate::rule::{Condition, ConditionId, ConditionValue, Logic};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// The `{ field, value }` payload of an operator object.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ConditionBody {
    pub field: String,
    pub value: ConditionValue,
}

/// One operator object: `{ "<op>": { "field": ..., "value": ... } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct WireCondition {
    pub operator: String,
    pub body: ConditionBody,
}

/// The stored form of a rule group.
#[derive(Debug, Clone, PartialEq)]
pub enum WireRule {
    /// `{}`: no rule configured.
    Empty,
    /// A bare operator object, used for a lone condition under AND.
    Single(WireCondition),
    /// `{ "$and" | "$or": [ ... ] }`
    Grouped {
        logic: Logic,
        conditions: Vec<WireCondition>,
    },
}

impl Serialize for WireCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.operator, &self.body)?;
        map.end()
    }
}

impl Serialize for WireRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WireRule::Empty => serializer.serialize_map(Some(0))?.end(),
            WireRule::Single(condition) => condition.serialize(serializer),
            WireRule::Grouped { logic, conditions } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(logic.wire_key(), conditions)?;
                map.end()
            }
        }
    }
}

/// Compact JSON by default, two-space indented JSON with `{:#}`.
impl fmt::Display for WireRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&Condition> for WireCondition {
    fn from(condition: &Condition) -> Self {
        Self {
            operator: condition.operator.as_str().to_string(),
            body: ConditionBody {
                field: condition.field.as_str().to_string(),
                value: condition.value.clone(),
            },
        }
    }
}

impl From<WireCondition> for Condition {
    fn from(wire: WireCondition) -> Self {
        Condition {
            id: ConditionId::generate(),
            field: wire.body.field.into(),
            operator: wire.operator.into(),
            value: wire.body.value,
        }
    }
}

impl WireRule {
    /// Parses a stored JSON string and checks its shape.
    pub fn parse(json: &str) -> Result<Self, CodecError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CodecError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Classifies an already parsed JSON value as empty, bare condition or logic wrapper.
    pub fn from_value(value: Value) -> Result<Self, CodecError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(CodecError::NotAnObject {
                    found: describe(&other).to_string(),
                });
            }
        };

        if object.is_empty() {
            return Ok(WireRule::Empty);
        }

        match object.keys().find_map(|key| Logic::from_wire_key(key)) {
            Some(logic) => Self::grouped_from_object(logic, object),
            None => WireCondition::from_object(0, object).map(WireRule::Single),
        }
    }

    fn grouped_from_object(logic: Logic, object: Map<String, Value>) -> Result<Self, CodecError> {
        if object.len() != 1 {
            return Err(CodecError::AmbiguousWrapper {
                logic: logic.wire_key().to_string(),
                key_count: object.len(),
            });
        }

        let entries = match object.into_iter().next() {
            Some((_, Value::Array(entries))) => entries,
            Some((_, other)) => {
                return Err(CodecError::WrapperNotAnArray {
                    logic: logic.wire_key().to_string(),
                    found: describe(&other).to_string(),
                });
            }
            None => Vec::new(),
        };

        let conditions = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| WireCondition::from_value(position, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WireRule::Grouped { logic, conditions })
    }
}

impl WireCondition {
    fn from_value(position: usize, value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Object(object) => Self::from_object(position, object),
            other => Err(CodecError::MalformedCondition {
                position,
                found: describe(&other).to_string(),
            }),
        }
    }

    fn from_object(position: usize, object: Map<String, Value>) -> Result<Self, CodecError> {
        if object.len() != 1 {
            return Err(CodecError::MalformedCondition {
                position,
                found: format!("an object with {} keys", object.len()),
            });
        }

        let Some((operator, payload)) = object.into_iter().next() else {
            return Err(CodecError::MalformedCondition {
                position,
                found: "an empty object".to_string(),
            });
        };

        let mut payload = match payload {
            Value::Object(payload) => payload,
            other => {
                return Err(CodecError::MalformedCondition {
                    position,
                    found: format!("'{}' holding {}", operator, describe(&other)),
                });
            }
        };

        let field = match payload.remove("field") {
            Some(Value::String(field)) => field,
            _ => return Err(CodecError::MissingField { position, operator }),
        };

        let value = match payload.remove("value") {
            Some(value) => parse_value(position, &operator, value)?,
            None => {
                return Err(CodecError::UnsupportedValue {
                    position,
                    operator,
                    found: "no value".to_string(),
                });
            }
        };

        Ok(WireCondition {
            operator,
            body: ConditionBody { field, value },
        })
    }
}

fn parse_value(
    position: usize,
    operator: &str,
    value: Value,
) -> Result<ConditionValue, CodecError> {
    let unsupported = |found: &str| CodecError::UnsupportedValue {
        position,
        operator: operator.to_string(),
        found: found.to_string(),
    };

    match value {
        Value::String(text) => Ok(ConditionValue::Text(text)),
        Value::Bool(flag) => Ok(ConditionValue::Flag(flag)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                other => Err(unsupported(&format!("a list containing {}", describe(&other)))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ConditionValue::List),
        other => Err(unsupported(describe(&other))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
