use crate::error::{Incompleteness, ValidationError};
use crate::rule::{Condition, RuleGroup};

/// Checks a group for incomplete conditions, reporting the first one found.
///
/// An empty group is valid: it stands for "no constraint configured".
pub fn check(group: &RuleGroup) -> Result<(), ValidationError> {
    for (index, condition) in group.conditions.iter().enumerate() {
        if let Some(reason) = incompleteness(condition) {
            return Err(ValidationError::IncompleteCondition { index, reason });
        }
    }
    Ok(())
}

/// Whether the group may be persisted and previewed.
pub fn validate(group: &RuleGroup) -> bool {
    check(group).is_ok()
}

fn incompleteness(condition: &Condition) -> Option<Incompleteness> {
    if condition.field.is_empty() {
        Some(Incompleteness::MissingField)
    } else if condition.operator.is_empty() {
        Some(Incompleteness::MissingOperator)
    } else if condition.value.is_empty_list() {
        Some(Incompleteness::EmptyValueList)
    } else {
        None
    }
}
