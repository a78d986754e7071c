//! Key-value storage capability.
//!
//! The widget never reaches for `window.localStorage` directly. It is handed a
//! [`LikeStore`], which lets tests and storage-less environments swap in
//! [`MemoryStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::count::LikeCount;
use crate::error::StoreError;

/// Synchronous string-keyed, string-valued store.
///
/// Methods take `&self` because the backing store is shared between every
/// click handler on the page. Implementations use interior mutability.
pub trait LikeStore {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the backend refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read the count stored under `key`, treating absent or malformed values as zero.
///
/// # Errors
///
/// Propagates read failures from the store.
pub fn load_count(store: &dyn LikeStore, key: &str) -> Result<LikeCount, StoreError> {
    let raw = store.get(key)?;
    Ok(LikeCount::parse(raw.as_deref()))
}

/// Persist `count` under `key` as canonical decimal text.
///
/// # Errors
///
/// Propagates write failures from the store.
pub fn save_count(store: &dyn LikeStore, key: &str, count: LikeCount) -> Result<(), StoreError> {
    store.set(key, &count.to_string())
}

/// In-memory store. Lives for the page session only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Seed the store from `(key, value)` pairs.
    pub(crate) fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RefCell::new(map) }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LikeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
