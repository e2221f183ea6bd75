use super::{ConditionValue, Operator, SignalField};
use rand::Rng;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const ID_SUFFIX_LEN: usize = 9;

/// Editor-local identity of a condition. Never written to the wire;
/// a fresh one is minted for every condition on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionId(String);

impl ConditionId {
    /// Generates an id of the form `<unix-millis>-<9 base36 chars>`.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        let mut rng = rand::rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .filter_map(|_| std::char::from_digit(rng.random_range(0..36), 36))
            .collect();

        Self(format!("{}-{}", millis, suffix))
    }

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single `field operator value` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub id: ConditionId,
    pub field: SignalField,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    /// Creates a condition with a freshly generated id.
    pub fn new(
        field: impl Into<SignalField>,
        operator: impl Into<Operator>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            id: ConditionId::generate(),
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// The condition a freshly added row starts with: first field, `$eq`, empty text.
    pub fn empty() -> Self {
        Self {
            id: ConditionId::generate(),
            field: SignalField::default(),
            operator: Operator::default(),
            value: ConditionValue::default(),
        }
    }

    /// Compares field, operator and value, ignoring the id.
    pub fn same_rule(&self, other: &Condition) -> bool {
        self.field == other.field && self.operator == other.operator && self.value == other.value
    }
}
