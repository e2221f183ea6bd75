use thiserror::Error;

/// Errors raised while decoding a stored wire value.
///
/// Every variant is a flavour of malformed storage. The lenient
/// [`decode`](crate::codec::decode) logs them and falls back to the empty group.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Stored rule is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Stored rule must be a JSON object, found {found}")]
    NotAnObject { found: String },

    #[error("Logic wrapper '{logic}' must be the only top-level key, found {key_count} keys")]
    AmbiguousWrapper { logic: String, key_count: usize },

    #[error("Logic wrapper '{logic}' must hold an array of conditions, found {found}")]
    WrapperNotAnArray { logic: String, found: String },

    #[error("Condition {position} must be an object with exactly one operator key, found {found}")]
    MalformedCondition { position: usize, found: String },

    #[error("Condition {position} ('{operator}') is missing a string 'field'")]
    MissingField { position: usize, operator: String },

    #[error(
        "Condition {position} ('{operator}') has an unsupported value: expected a string, boolean or list of strings, found {found}"
    )]
    UnsupportedValue {
        position: usize,
        operator: String,
        found: String,
    },
}

/// Why a condition failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incompleteness {
    MissingField,
    MissingOperator,
    EmptyValueList,
}

impl std::fmt::Display for Incompleteness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Incompleteness::MissingField => write!(f, "no field selected"),
            Incompleteness::MissingOperator => write!(f, "no operator selected"),
            Incompleteness::EmptyValueList => write!(f, "value list is empty"),
        }
    }
}

/// Errors reported by the validator. They block persistence, never editing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Condition {index} is incomplete: {reason}")]
    IncompleteCondition { index: usize, reason: Incompleteness },
}

/// Errors returned by editor mutations that were rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("The editing surface is disabled by the host")]
    Disabled,

    #[error("Condition at index {index} does not exist (the group has {len} conditions)")]
    ConditionNotFound { index: usize, len: usize },

    #[error("The logic operator can only be changed with at least two conditions, found {0}")]
    LogicRequiresMultipleConditions(usize),

    #[error("Complete the existing conditions first: {0}")]
    Incomplete(#[from] ValidationError),
}
