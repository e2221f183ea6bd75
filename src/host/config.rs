use ahash::AHashMap;
use tracing::warn;

/// Frame sizing policy, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Requested once, right after initialization.
    pub initial_height: u32,
    pub base_height: u32,
    pub condition_height: u32,
    pub max_height: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_height: 400,
            base_height: 300,
            condition_height: 60,
            max_height: 800,
        }
    }
}

impl EditorConfig {
    /// Height for a group with `conditions` rows, capped at `max_height`.
    pub fn height_for(&self, conditions: usize) -> u32 {
        let rows = u32::try_from(conditions).unwrap_or(u32::MAX);
        self.base_height
            .saturating_add(self.condition_height.saturating_mul(rows))
            .min(self.max_height)
    }

    /// Default policy overridden by the host element's configuration.
    pub fn from_host_config(config: &AHashMap<String, String>) -> Self {
        Self::default().apply_host_config(config)
    }

    /// Overrides heights from the keys `initialHeight`, `baseHeight`,
    /// `conditionHeight` and `maxHeight`. Unparsable entries are ignored.
    pub fn apply_host_config(mut self, config: &AHashMap<String, String>) -> Self {
        let slots: [(&str, &mut u32); 4] = [
            ("initialHeight", &mut self.initial_height),
            ("baseHeight", &mut self.base_height),
            ("conditionHeight", &mut self.condition_height),
            ("maxHeight", &mut self.max_height),
        ];

        for (key, slot) in slots {
            let Some(raw) = config.get(key) else {
                continue;
            };
            match raw.trim().parse::<u32>() {
                Ok(height) => *slot = height,
                Err(e) => warn!(key, value = %raw, error = %e, "ignoring invalid height setting"),
            }
        }
        self
    }
}
