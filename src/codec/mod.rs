//! Conversion between the editable [`RuleGroup`] and its compact stored JSON form.
//!
//! ```text
//! Empty:        {}
//! Single (AND): { "<op>": { "field": "<field>", "value": <val> } }
//! Grouped:      { "$and" | "$or": [ { "<op>": { ... } }, ... ] }
//! ```
//!
//! A lone condition under AND is written unwrapped. The decoder still accepts a
//! wrapper around a single condition, under either logic.

use crate::error::CodecError;
use crate::rule::{Logic, RuleGroup};
use tracing::warn;

mod wire;

pub use wire::{ConditionBody, WireCondition, WireRule};

/// Converts a group into its wire form.
pub fn encode(group: &RuleGroup) -> WireRule {
    WireRule::from(group)
}

/// The string handed to the host: compact JSON, or `""` for the empty group.
pub fn to_wire_string(group: &RuleGroup) -> String {
    match encode(group) {
        WireRule::Empty => String::new(),
        rule => rule.to_string(),
    }
}

/// Indented JSON for the preview panel.
pub fn format_pretty(rule: &WireRule) -> String {
    format!("{:#}", rule)
}

/// Decodes a stored value, reporting any malformed shape.
///
/// Absent, empty and whitespace-only values mean "no rule" and yield the
/// default empty AND-group.
pub fn decode_strict(stored: Option<&str>) -> Result<RuleGroup, CodecError> {
    match stored.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => WireRule::parse(raw).map(RuleGroup::from),
        None => Ok(RuleGroup::default()),
    }
}

/// Decodes a stored value, substituting the empty AND-group for anything malformed.
pub fn decode(stored: Option<&str>) -> RuleGroup {
    decode_strict(stored).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse stored rule, falling back to an empty group");
        RuleGroup::default()
    })
}

impl From<&RuleGroup> for WireRule {
    fn from(group: &RuleGroup) -> Self {
        match group.conditions.as_slice() {
            [] => WireRule::Empty,
            [only] if group.logic == Logic::And => WireRule::Single(only.into()),
            conditions => WireRule::Grouped {
                logic: group.logic,
                conditions: conditions.iter().map(Into::into).collect(),
            },
        }
    }
}

impl From<WireRule> for RuleGroup {
    fn from(rule: WireRule) -> Self {
        match rule {
            WireRule::Empty => RuleGroup::default(),
            WireRule::Single(condition) => RuleGroup::new(Logic::And, vec![condition.into()]),
            WireRule::Grouped { logic, conditions } => {
                RuleGroup::new(logic, conditions.into_iter().map(Into::into).collect())
            }
        }
    }
}
