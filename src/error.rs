//! Error types for the like widget.
//!
//! None of these reach the user. The browser event boundary logs them and
//! leaves the affected button inert or unchanged.

/// Failure talking to the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be obtained at all (e.g. storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading `key` failed.
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    /// Writing `key` failed (quota exceeded, storage revoked, ...).
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Error returned by [`crate::config::WidgetConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config text is not valid JSON for [`crate::config::WidgetConfig`].
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid widget config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Per-button failure during initialization or click handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The button has no usable post identifier attribute.
    #[error("like button has no post id")]
    MissingPostId,
    /// The button has no count-display child.
    #[error("like button for post '{post_id}' has no count display")]
    MissingCountDisplay { post_id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The host document rejected an operation.
    #[error("dom error: {0}")]
    Dom(String),
}
