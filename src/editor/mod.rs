use crate::codec;
use crate::error::EditorError;
use crate::host::{EditorConfig, HostBridge, HostElement};
use crate::rule::{Condition, ConditionId, ConditionValue, Logic, Operator, RuleGroup, SignalField};
use crate::validate;
use tracing::debug;

/// Inline message shown while the group has incomplete conditions.
pub const INCOMPLETE_MESSAGE: &str = "Please complete all condition fields";

/// Configures a [`RuleEditor`] before the host initializes it.
pub struct EditorBuilder<H> {
    host: H,
    config: EditorConfig,
}

impl<H: HostBridge> EditorBuilder<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: EditorConfig::default(),
        }
    }

    /// Base sizing policy. Entries in the host element's config still override it.
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Decodes the stored value, requests the initial frame height, then sizes
    /// the frame for the decoded group when it is complete. Nothing is persisted.
    ///
    /// A malformed stored value is logged and replaced by the empty AND-group.
    pub fn initialize(self, element: HostElement) -> RuleEditor<H> {
        let config = self.config.apply_host_config(&element.config);
        let group = codec::decode(element.value.as_deref());
        debug!(
            conditions = group.len(),
            disabled = element.disabled,
            "rule editor initialized"
        );

        let mut editor = RuleEditor {
            host: self.host,
            group,
            disabled: element.disabled,
            config,
        };
        editor.host.request_height(editor.config.initial_height);
        if editor.is_valid() {
            let height = editor.config.height_for(editor.group.len());
            editor.host.request_height(height);
        }
        editor
    }
}

/// Editing state of one rule group, bound to a host for its whole lifetime.
///
/// Every accepted mutation re-validates the group and, when it is complete,
/// pushes the wire string and a new frame height to the host. While the host
/// reports the surface as disabled, all mutations are rejected.
pub struct RuleEditor<H> {
    host: H,
    group: RuleGroup,
    disabled: bool,
    config: EditorConfig,
}

impl<H: HostBridge> RuleEditor<H> {
    pub fn builder(host: H) -> EditorBuilder<H> {
        EditorBuilder::new(host)
    }

    /// Shorthand for `RuleEditor::builder(host).initialize(element)`.
    pub fn initialize(host: H, element: HostElement) -> Self {
        EditorBuilder::new(host).initialize(element)
    }

    pub fn group(&self) -> &RuleGroup {
        &self.group
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Host notification that the editing surface was locked or unlocked.
    pub fn on_disabled_changed(&mut self, disabled: bool) {
        debug!(disabled, "host changed disabled state");
        self.disabled = disabled;
    }

    pub fn is_valid(&self) -> bool {
        validate::validate(&self.group)
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        (!self.is_valid()).then_some(INCOMPLETE_MESSAGE)
    }

    /// Indented wire JSON, available only while the group is valid.
    pub fn preview(&self) -> Option<String> {
        self.is_valid()
            .then(|| codec::format_pretty(&codec::encode(&self.group)))
    }

    pub fn can_add_condition(&self) -> bool {
        !self.disabled && self.is_valid()
    }

    /// The logic selector only unlocks with two or more conditions.
    pub fn can_change_logic(&self) -> bool {
        !self.disabled && self.group.len() >= 2
    }

    /// Appends an empty condition and returns its id.
    pub fn add_condition(&mut self) -> Result<ConditionId, EditorError> {
        self.ensure_enabled()?;
        validate::check(&self.group)?;

        let condition = Condition::empty();
        let id = condition.id.clone();
        self.group.conditions.push(condition);
        self.sync();
        Ok(id)
    }

    /// Replaces the condition at `index` wholesale.
    pub fn update_condition(
        &mut self,
        index: usize,
        condition: Condition,
    ) -> Result<(), EditorError> {
        *self.condition_mut(index)? = condition;
        self.sync();
        Ok(())
    }

    pub fn remove_condition(&mut self, index: usize) -> Result<Condition, EditorError> {
        self.condition_mut(index)?;
        let removed = self.group.conditions.remove(index);
        self.sync();
        Ok(removed)
    }

    pub fn set_logic(&mut self, logic: Logic) -> Result<(), EditorError> {
        self.ensure_enabled()?;
        if self.group.len() < 2 {
            return Err(EditorError::LogicRequiresMultipleConditions(self.group.len()));
        }
        self.group.logic = logic;
        self.sync();
        Ok(())
    }

    /// Switches the field and resets the value to that field's default.
    pub fn set_field(&mut self, index: usize, field: SignalField) -> Result<(), EditorError> {
        let condition = self.condition_mut(index)?;
        condition.value = field.default_value();
        condition.field = field;
        self.sync();
        Ok(())
    }

    pub fn set_operator(&mut self, index: usize, operator: Operator) -> Result<(), EditorError> {
        self.condition_mut(index)?.operator = operator;
        self.sync();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: ConditionValue) -> Result<(), EditorError> {
        self.condition_mut(index)?.value = value;
        self.sync();
        Ok(())
    }

    fn ensure_enabled(&self) -> Result<(), EditorError> {
        if self.disabled {
            Err(EditorError::Disabled)
        } else {
            Ok(())
        }
    }

    fn condition_mut(&mut self, index: usize) -> Result<&mut Condition, EditorError> {
        self.ensure_enabled()?;
        let len = self.group.len();
        self.group
            .conditions
            .get_mut(index)
            .ok_or(EditorError::ConditionNotFound { index, len })
    }

    /// Pushes the group to the host if it is complete. Returns whether it did.
    fn sync(&mut self) -> bool {
        if let Err(e) = validate::check(&self.group) {
            debug!(error = %e, "group incomplete, skipping host sync");
            return false;
        }

        let wire = codec::to_wire_string(&self.group);
        let height = self.config.height_for(self.group.len());
        debug!(conditions = self.group.len(), height, "persisting rule group");
        self.host.persist(&wire);
        self.host.request_height(height);
        true
    }
}
