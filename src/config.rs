//! Widget configuration: which markup to look for and how to key storage.
//!
//! Defaults match the stock blog theme markup:
//!
//! ```html
//! <button class="like-button" data-post-id="42">
//!     Like <span class="like-count">0</span>
//! </button>
//! ```
//!
//! Hosts with different markup embed a JSON object overriding any subset of
//! fields.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BUTTON_SELECTOR: &str = ".like-button";
pub const DEFAULT_COUNT_SELECTOR: &str = ".like-count";
pub const DEFAULT_POST_ID_ATTRIBUTE: &str = "data-post-id";
pub const DEFAULT_WIRED_ATTRIBUTE: &str = "data-like-wired";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// CSS selector matching every like button on the page.
    pub button_selector: String,
    /// CSS selector, relative to a button, for its count display.
    pub count_selector: String,
    /// Attribute on the button holding the post identifier.
    pub post_id_attribute: String,
    /// Attribute set on a button once its click handler is attached.
    pub wired_attribute: String,
    /// Prepended to the post identifier to form the storage key.
    pub key_prefix: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            button_selector: DEFAULT_BUTTON_SELECTOR.to_owned(),
            count_selector: DEFAULT_COUNT_SELECTOR.to_owned(),
            post_id_attribute: DEFAULT_POST_ID_ATTRIBUTE.to_owned(),
            wired_attribute: DEFAULT_WIRED_ATTRIBUTE.to_owned(),
            key_prefix: String::new(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON config object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a selector or attribute name is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every selector and attribute name is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("button_selector", &self.button_selector),
            ("count_selector", &self.count_selector),
            ("post_id_attribute", &self.post_id_attribute),
            ("wired_attribute", &self.wired_attribute),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field, reason: "must not be empty".into() });
            }
        }
        if self.post_id_attribute == self.wired_attribute {
            return Err(ConfigError::Invalid {
                field: "wired_attribute",
                reason: "must differ from post_id_attribute".into(),
            });
        }
        Ok(())
    }

    /// Storage key for a post.
    #[must_use]
    pub fn storage_key(&self, post_id: &str) -> String {
        format!("{}{post_id}", self.key_prefix)
    }
}
