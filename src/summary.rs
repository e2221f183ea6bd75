use crate::rule::{Condition, ConditionValue, RuleGroup, SignalField};
use itertools::Itertools;

/// Formats rule groups into human-readable sentences.
pub struct RuleSummary;

impl RuleSummary {
    pub const EMPTY: &'static str = "No conditions defined yet.";

    /// Renders the group as one line, e.g.
    /// `Industry equals Retail AND Returning Visitor equals Yes`.
    pub fn describe(group: &RuleGroup) -> String {
        if group.is_empty() {
            return Self::EMPTY.to_string();
        }

        let separator = format!(" {} ", group.logic);
        group
            .conditions
            .iter()
            .map(Self::describe_condition)
            .join(&separator)
    }

    /// Renders a single condition using catalog labels where known.
    pub fn describe_condition(condition: &Condition) -> String {
        format!(
            "{} {} {}",
            condition.field.label(),
            condition.operator.label(),
            Self::format_value(&condition.field, &condition.value)
        )
    }

    fn format_value(field: &SignalField, value: &ConditionValue) -> String {
        match value {
            ConditionValue::Flag(true) => "Yes".to_string(),
            ConditionValue::Flag(false) => "No".to_string(),
            ConditionValue::Text(text) if text.is_empty() => "\"\"".to_string(),
            ConditionValue::Text(text) => Self::option_label(field, text),
            ConditionValue::List(items) => format!(
                "({})",
                items.iter().map(|item| Self::option_label(field, item)).join(", ")
            ),
        }
    }

    fn option_label(field: &SignalField, value: &str) -> String {
        field.option_label(value).unwrap_or(value).to_string()
    }
}
