//! Tests for the rule group validator.
mod common;
use common::*;
use jouken::prelude::*;

#[test]
fn test_empty_group_is_valid() {
    let group = RuleGroup::new(Logic::And, vec![]);
    assert!(validate(&group));
    assert!(check(&group).is_ok());
}

#[test]
fn test_complete_conditions_are_valid() {
    let group = group_of(
        Logic::Or,
        vec![
            ("industry", "$eq", "".into()),
            ("returning_visitor", "$eq", false.into()),
            ("solution", "$in", vec!["automation"].into()),
        ],
    );
    // An empty text value still counts as set.
    assert!(validate(&group));
}

#[test]
fn test_empty_value_list_is_invalid() {
    let group = group_of(
        Logic::And,
        vec![
            ("industry", "$eq", "pharma".into()),
            ("solution", "$in", ConditionValue::List(vec![])),
        ],
    );
    assert!(!validate(&group));
    assert_eq!(
        check(&group),
        Err(ValidationError::IncompleteCondition {
            index: 1,
            reason: Incompleteness::EmptyValueList,
        })
    );
}

#[test]
fn test_missing_field_is_invalid() {
    let group = group_of(Logic::And, vec![("", "$eq", "pharma".into())]);
    assert!(!validate(&group));
    assert_eq!(
        check(&group),
        Err(ValidationError::IncompleteCondition {
            index: 0,
            reason: Incompleteness::MissingField,
        })
    );
}

#[test]
fn test_missing_operator_is_invalid() {
    let group = group_of(Logic::And, vec![("industry", "", "pharma".into())]);
    assert_eq!(
        check(&group),
        Err(ValidationError::IncompleteCondition {
            index: 0,
            reason: Incompleteness::MissingOperator,
        })
    );
}

#[test]
fn test_first_offending_condition_is_reported() {
    let group = group_of(
        Logic::Or,
        vec![
            ("industry", "$eq", "pharma".into()),
            ("", "", ConditionValue::List(vec![])),
            ("solution", "$nin", ConditionValue::List(vec![])),
        ],
    );
    match check(&group) {
        Err(ValidationError::IncompleteCondition { index, reason }) => {
            assert_eq!(index, 1);
            assert_eq!(reason, Incompleteness::MissingField);
        }
        Ok(()) => panic!("Expected an incomplete condition"),
    }
}

#[test]
fn test_unknown_catalog_values_are_not_rejected() {
    let group = group_of(Logic::And, vec![("utm_campaign", "$regex", "spring".into())]);
    assert!(validate(&group));
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::IncompleteCondition {
        index: 2,
        reason: Incompleteness::EmptyValueList,
    };
    let message = err.to_string();
    assert!(message.contains('2'));
    assert!(message.contains("value list is empty"));
}
