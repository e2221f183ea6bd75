//! Common test utilities: a recording host and stored-rule fixtures.
use jouken::prelude::*;

/// Two conditions under OR, one text and one list value.
#[allow(dead_code)]
pub const GROUPED_OR_JSON: &str =
    r#"{"$or":[{"$eq":{"field":"industry","value":"pharma"}},{"$in":{"field":"solution","value":["automation","digital"]}}]}"#;

/// A lone condition, stored unwrapped.
#[allow(dead_code)]
pub const SINGLE_JSON: &str = r#"{"$eq":{"field":"returning_visitor","value":true}}"#;

/// Values written by an older catalog: unknown field and operator.
#[allow(dead_code)]
pub const LEGACY_JSON: &str =
    r#"{"$and":[{"$regex":{"field":"utm_source","value":"news.*"}},{"$ne":{"field":"industry","value":"food"}}]}"#;

/// Host double that records every callback.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub persisted: Vec<String>,
    pub heights: Vec<u32>,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn last_persisted(&self) -> Option<&str> {
        self.persisted.last().map(String::as_str)
    }

    pub fn last_height(&self) -> Option<u32> {
        self.heights.last().copied()
    }
}

impl HostBridge for RecordingHost {
    fn persist(&mut self, value: &str) {
        self.persisted.push(value.to_string());
    }

    fn request_height(&mut self, height: u32) {
        self.heights.push(height);
    }
}

/// An editor over a fresh recording host, initialized from `stored`.
#[allow(dead_code)]
pub fn editor_with(stored: Option<&str>) -> RuleEditor<RecordingHost> {
    RuleEditor::initialize(RecordingHost::default(), HostElement::new(stored, false))
}

/// Builds a group from `(field, operator, value)` triples.
#[allow(dead_code)]
pub fn group_of(logic: Logic, triples: Vec<(&str, &str, ConditionValue)>) -> RuleGroup {
    RuleGroup::new(
        logic,
        triples
            .into_iter()
            .map(|(field, operator, value)| Condition::new(field, operator, value))
            .collect(),
    )
}
