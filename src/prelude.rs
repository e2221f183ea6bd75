//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types, traits and functions
//! from the jouken crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use jouken::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let stored = std::fs::read_to_string("path/to/stored_rule.json")?;
//! let group = decode_strict(Some(stored.as_str()))?;
//!
//! check(&group)?;
//! println!("{}", RuleSummary::describe(&group));
//! println!("{}", to_wire_string(&group));
//! # Ok(())
//! # }
//! ```

// Codec and validation
pub use crate::codec::{
    WireCondition, WireRule, decode, decode_strict, encode, format_pretty, to_wire_string,
};
pub use crate::validate::{check, validate};

// Rule model
pub use crate::rule::{
    Condition, ConditionId, ConditionValue, FieldOption, Logic, Operator, RuleGroup, SignalField,
    ValueKind,
};

// Host integration and editing
pub use crate::editor::{EditorBuilder, RuleEditor};
pub use crate::host::{EditorConfig, HostBridge, HostElement};

// Error types
pub use crate::error::{CodecError, EditorError, Incompleteness, ValidationError};

// Summary formatting
pub use crate::summary::RuleSummary;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
