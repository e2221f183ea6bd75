//! Unit tests for the rule model, catalog, summary and error types.
mod common;
use ahash::AHashMap;
use common::*;
use jouken::prelude::*;
use std::collections::HashSet;

#[test]
fn test_catalog_strings_round_trip() {
    for field in SignalField::known() {
        assert!(field.is_known());
        assert_eq!(SignalField::from(field.as_str()), field);
    }
    for operator in Operator::known() {
        assert!(operator.is_known());
        assert_eq!(Operator::from(operator.as_str()), operator);
    }

    assert_eq!(SignalField::known().count(), 6);
    assert_eq!(Operator::known().count(), 9);
}

#[test]
fn test_unknown_catalog_strings_are_preserved() {
    let field = SignalField::from("utm_source".to_string());
    assert_eq!(field, SignalField::Other("utm_source".to_string()));
    assert_eq!(field.label(), "utm_source");
    assert_eq!(field.value_kind(), ValueKind::Text);
    assert!(field.options().is_empty());

    let operator = Operator::from("$regex");
    assert_eq!(operator.as_str(), "$regex");
    assert_eq!(format!("{}", operator), "$regex");
    assert!(!operator.takes_list());
}

#[test]
fn test_catalog_defaults_and_labels() {
    assert_eq!(SignalField::default(), SignalField::Industry);
    assert_eq!(Operator::default(), Operator::Eq);
    assert_eq!(Operator::default().label(), "equals");
    assert_eq!(Operator::Nin.label(), "is not one of");
    assert!(Operator::In.takes_list());

    assert_eq!(SignalField::Solution.label(), "Solution Interest");
    assert_eq!(
        SignalField::Industry.option_label("pharma"),
        Some("Pharma & Life Sciences")
    );
    assert_eq!(SignalField::Industry.option_label("space"), None);
    assert_eq!(
        SignalField::ReturningVisitor.value_kind(),
        ValueKind::Boolean
    );
    assert_eq!(
        SignalField::ContentType.default_value(),
        ConditionValue::from("article")
    );
}

#[test]
fn test_operator_display_order() {
    let order: Vec<String> = Operator::known().map(|op| op.to_string()).collect();
    assert_eq!(
        order,
        vec!["$eq", "$ne", "$in", "$nin", "$contains", "$gt", "$lt", "$gte", "$lte"]
    );
}

#[test]
fn test_logic_keys_and_labels() {
    assert_eq!(Logic::default(), Logic::And);
    assert_eq!(Logic::And.wire_key(), "$and");
    assert_eq!(Logic::from_wire_key("$or"), Some(Logic::Or));
    assert_eq!(Logic::from_wire_key("$not"), None);
    assert_eq!(Logic::Or.label(), "ANY");
    assert_eq!(format!("{}", Logic::And), "AND");
}

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", ConditionValue::from("pharma")), "pharma");
    assert_eq!(format!("{}", ConditionValue::Flag(false)), "false");
    assert_eq!(
        format!("{}", ConditionValue::from(vec!["a", "b"])),
        "[a, b]"
    );
    assert!(ConditionValue::List(vec![]).is_empty_list());
    assert!(!ConditionValue::default().is_empty_list());
}

#[test]
fn test_condition_ids_are_unique_and_shaped() {
    let ids: HashSet<ConditionId> = (0..200).map(|_| ConditionId::generate()).collect();
    assert_eq!(ids.len(), 200);

    let id = ConditionId::generate();
    let (millis, suffix) = id.as_str().split_once('-').expect("id has a dash");
    assert!(millis.parse::<u128>().is_ok());
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_group_equivalence_ignores_ids() {
    let a = group_of(Logic::And, vec![("industry", "$eq", "food".into())]);
    let b = group_of(Logic::And, vec![("industry", "$eq", "food".into())]);
    assert_ne!(a, b);
    assert!(a.equivalent(&b));

    let c = group_of(Logic::Or, vec![("industry", "$eq", "food".into())]);
    assert!(!a.equivalent(&c));
}

#[test]
fn test_summary_uses_catalog_labels() {
    let group = decode(Some(GROUPED_OR_JSON));
    assert_eq!(
        RuleSummary::describe(&group),
        "Industry equals Pharma & Life Sciences OR Solution Interest is one of (Automation, Digital Solutions)"
    );
}

#[test]
fn test_summary_edge_cases() {
    assert_eq!(
        RuleSummary::describe(&RuleGroup::default()),
        "No conditions defined yet."
    );

    let group = decode(Some(SINGLE_JSON));
    assert_eq!(
        RuleSummary::describe(&group),
        "Returning Visitor equals Yes"
    );

    let legacy = decode(Some(LEGACY_JSON));
    assert_eq!(
        RuleSummary::describe(&legacy),
        "utm_source $regex news.* AND Industry not equals Food & Beverage"
    );

    let blank = Condition::empty();
    assert_eq!(
        RuleSummary::describe_condition(&blank),
        "Industry equals \"\""
    );
}

#[test]
fn test_editor_config_heights() {
    let config = EditorConfig::default();
    assert_eq!(config.height_for(0), 300);
    assert_eq!(config.height_for(3), 480);
    assert_eq!(config.height_for(usize::MAX), 800);

    let mut host_config = AHashMap::new();
    host_config.insert("conditionHeight".to_string(), " 80 ".to_string());
    host_config.insert("initialHeight".to_string(), "-5".to_string());
    host_config.insert("unrelated".to_string(), "1".to_string());
    let config = EditorConfig::from_host_config(&host_config);
    assert_eq!(config.condition_height, 80);
    assert_eq!(config.initial_height, 400);
    assert_eq!(config.height_for(2), 460);
}

#[test]
fn test_error_display() {
    let err = CodecError::MissingField {
        position: 3,
        operator: "$eq".to_string(),
    };
    assert!(err.to_string().contains('3'));
    assert!(err.to_string().contains("$eq"));

    let err = EditorError::ConditionNotFound { index: 4, len: 2 };
    assert!(err.to_string().contains('4'));
    assert!(err.to_string().contains('2'));

    let err = EditorError::from(ValidationError::IncompleteCondition {
        index: 0,
        reason: Incompleteness::MissingOperator,
    });
    assert!(err.to_string().contains("no operator selected"));
}
