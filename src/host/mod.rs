//! The narrow boundary between the editor and the content-management host.
//!
//! The host owns the element's lifecycle: it injects the stored value and the
//! disabled flag once, receives every persisted value, and sizes the frame.

use ahash::AHashMap;

mod config;

pub use config::EditorConfig;

/// Callbacks the host exposes to the editor.
pub trait HostBridge {
    /// Stores the wire string. An empty string clears the stored rule.
    fn persist(&mut self, value: &str);

    /// Asks the host to resize the editing frame.
    fn request_height(&mut self, height: u32);
}

impl<H: HostBridge + ?Sized> HostBridge for &mut H {
    fn persist(&mut self, value: &str) {
        (**self).persist(value);
    }

    fn request_height(&mut self, height: u32) {
        (**self).request_height(height);
    }
}

/// What the host hands over when the element is initialized.
#[derive(Debug, Clone, Default)]
pub struct HostElement {
    /// Previously stored wire string, if any.
    pub value: Option<String>,
    pub disabled: bool,
    /// Free-form element configuration set up in the host.
    pub config: AHashMap<String, String>,
}

impl HostElement {
    pub fn new(value: Option<&str>, disabled: bool) -> Self {
        Self {
            value: value.map(str::to_string),
            disabled,
            config: AHashMap::new(),
        }
    }

    pub fn with_config_entry(mut self, key: &str, value: &str) -> Self {
        self.config.insert(key.to_string(), value.to_string());
        self
    }
}
