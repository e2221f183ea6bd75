//! # Jouken - Flat Rule Model, Wire Codec and Editor State
//!
//! **Jouken** holds the core of a personalization rule builder embedded in a
//! content-management host. An editor composes conditions (signal field,
//! operator, value) joined by a single logic operator, and the result is stored
//! by the host as one compact JSON expression.
//!
//! ## Core Workflow
//!
//! 1.  **Initialize**: The host hands over the stored value and the disabled flag
//!     in a [`HostElement`](host::HostElement). [`RuleEditor`](editor::RuleEditor)
//!     decodes it into a [`RuleGroup`](rule::RuleGroup), falling back to an empty
//!     AND-group when the stored value is malformed.
//! 2.  **Edit**: Conditions are added, changed and removed through the editor.
//!     Mutations are rejected while the host reports the surface as disabled.
//! 3.  **Persist**: After every accepted mutation the group is validated; a
//!     complete group is encoded and pushed to the host through the
//!     [`HostBridge`](host::HostBridge) trait, together with a new frame height.
//!
//! The codec and validator are plain functions and can be used on their own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jouken::prelude::*;
//!
//! // 1. Implement the host callbacks.
//! #[derive(Default)]
//! struct ConsoleHost;
//!
//! impl HostBridge for ConsoleHost {
//!     fn persist(&mut self, value: &str) {
//!         println!("persist: {}", value);
//!     }
//!
//!     fn request_height(&mut self, height: u32) {
//!         println!("height: {}px", height);
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     // 2. Initialize from the stored value.
//!     let stored = r#"{"$eq":{"field":"industry","value":"pharma"}}"#;
//!     let mut editor = RuleEditor::initialize(ConsoleHost, HostElement::new(Some(stored), false));
//!
//!     // 3. Edit. Every complete state is persisted.
//!     editor.add_condition()?;
//!     editor.set_field(1, SignalField::Solution)?;
//!     editor.set_operator(1, Operator::In)?;
//!     editor.set_value(1, vec!["automation", "digital"].into())?;
//!     editor.set_logic(Logic::Or)?;
//!
//!     println!("{}", RuleSummary::describe(editor.group()));
//!     if let Some(json) = editor.preview() {
//!         println!("{}", json);
//!     }
//!
//!     // The codec can also be used directly.
//!     let group = decode(Some(stored));
//!     assert_eq!(to_wire_string(&group), stored);
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod editor;
pub mod error;
pub mod host;
pub mod prelude;
pub mod rule;
pub mod summary;
pub mod validate;
