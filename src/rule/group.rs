use super::Condition;
use std::fmt;

/// The combinator applied across every condition of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// The top-level key used in the wire form.
    pub const fn wire_key(self) -> &'static str {
        match self {
            Logic::And => "$and",
            Logic::Or => "$or",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<Self> {
        match key {
            "$and" => Some(Logic::And),
            "$or" => Some(Logic::Or),
            _ => None,
        }
    }

    /// Selector label ("Match ALL / ANY of the following conditions").
    pub const fn label(self) -> &'static str {
        match self {
            Logic::And => "ALL",
            Logic::Or => "ANY",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::And => write!(f, "AND"),
            Logic::Or => write!(f, "OR"),
        }
    }
}

/// A flat list of conditions joined by one logic operator.
///
/// Condition order carries no meaning for evaluation but is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleGroup {
    pub logic: Logic,
    pub conditions: Vec<Condition>,
}

impl RuleGroup {
    pub fn new(logic: Logic, conditions: Vec<Condition>) -> Self {
        Self { logic, conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Equality up to condition ids: same logic and the same ordered
    /// (field, operator, value) triples.
    pub fn equivalent(&self, other: &RuleGroup) -> bool {
        self.logic == other.logic
            && self.conditions.len() == other.conditions.len()
            && self
                .conditions
                .iter()
                .zip(&other.conditions)
                .all(|(a, b)| a.same_rule(b))
    }
}
