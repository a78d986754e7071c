//! Like button initialization and click handling.
//!
//! On load every like button is read back from storage, its count display is
//! filled in, and a click listener is attached. Each click re-reads the stored
//! count, bumps it, writes it back and, only once the write succeeded, updates
//! the display. Nothing is surfaced to the user: failures are logged and the
//! affected button is left alone.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::count::LikeCount;
use crate::dom::{CountDisplay, LikeButtonElement, LikeDocument};
use crate::error::WidgetError;
use crate::store::{LikeStore, load_count, save_count};

/// Per-button click state: which key to write and the last persisted count.
#[derive(Debug)]
pub struct LikeHandle {
    post_id: String,
    key: String,
    count: Cell<LikeCount>,
}

impl LikeHandle {
    #[must_use]
    pub fn new(post_id: String, key: String, count: LikeCount) -> Self {
        Self { post_id, key, count: Cell::new(count) }
    }

    #[must_use]
    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn count(&self) -> LikeCount {
        self.count.get()
    }
}

/// Handle one click: re-read, increment, persist, then redraw.
///
/// The stored value wins over the handle's last count, so writes from other
/// tabs are built upon rather than overwritten. If the read fails the handle's
/// last count is used.
///
/// # Errors
///
/// Returns [`WidgetError::Store`] if the new count could not be written. The
/// handle and display are left unchanged in that case.
pub fn on_click(
    store: &dyn LikeStore,
    handle: &LikeHandle,
    display: &dyn CountDisplay,
) -> Result<LikeCount, WidgetError> {
    let current = match load_count(store, handle.key()) {
        Ok(count) => count,
        Err(err) => {
            warn!("using last known like count for post '{}': {err}", handle.post_id());
            handle.count()
        }
    };
    let next = current.incremented();
    save_count(store, handle.key(), next)?;
    handle.count.set(next);
    display.set_text(&next.to_string());
    Ok(next)
}

/// Tally of one initialization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Buttons that received a click handler in this pass.
    pub wired: usize,
    /// Already-wired buttons whose display was refreshed from storage.
    pub refreshed: usize,
    /// Buttons left inert because of missing markup or DOM errors.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonOutcome {
    Wired,
    Refreshed,
}

/// Binds like buttons in a document to a store.
pub struct LikeWidget {
    store: Rc<dyn LikeStore>,
    config: WidgetConfig,
}

impl LikeWidget {
    #[must_use]
    pub fn new(store: Rc<dyn LikeStore>, config: WidgetConfig) -> Self {
        Self { store, config }
    }

    /// The persisted count for `post_id`, zero when absent or unreadable.
    #[must_use]
    pub fn count_for(&self, post_id: &str) -> LikeCount {
        let key = self.config.storage_key(post_id);
        self.read_count(&key)
    }

    /// Find every like button in `document`, show its stored count and wire
    /// its click handler.
    ///
    /// Safe to call again: buttons already carrying the wired attribute only
    /// have their display refreshed, from the key their handler writes to.
    pub fn initialize<D: LikeDocument>(&self, document: &D) -> InitReport {
        let mut report = InitReport::default();

        let buttons = match document.like_buttons(&self.config.button_selector) {
            Ok(buttons) => buttons,
            Err(err) => {
                warn!("like buttons not initialized: {err}");
                return report;
            }
        };

        for button in &buttons {
            match self.init_button(button) {
                Ok(ButtonOutcome::Wired) => report.wired += 1,
                Ok(ButtonOutcome::Refreshed) => report.refreshed += 1,
                Err(err) => {
                    warn!("skipping like button: {err}");
                    report.skipped += 1;
                }
            }
        }

        info!(
            "like buttons initialized: wired={} refreshed={} skipped={}",
            report.wired, report.refreshed, report.skipped
        );
        report
    }

    fn init_button<B: LikeButtonElement>(&self, button: &B) -> Result<ButtonOutcome, WidgetError> {
        let post_id = button
            .attribute(&self.config.post_id_attribute)
            .filter(|id| !id.trim().is_empty())
            .ok_or(WidgetError::MissingPostId)?;

        let display = button
            .count_display(&self.config.count_selector)?
            .ok_or_else(|| WidgetError::MissingCountDisplay { post_id: post_id.clone() })?;

        // A wired button records the key its handler writes to.
        if let Some(wired_key) = button.attribute(&self.config.wired_attribute) {
            let count = self.read_count(&wired_key);
            display.set_text(&count.to_string());
            debug!("refreshed like button for post '{post_id}' ({count})");
            return Ok(ButtonOutcome::Refreshed);
        }

        let key = self.config.storage_key(&post_id);
        let count = self.read_count(&key);
        display.set_text(&count.to_string());

        let handle = LikeHandle::new(post_id, key.clone(), count);
        let store = Rc::clone(&self.store);
        debug!("wiring like button for post '{}' ({count})", handle.post_id());
        button.on_click(Box::new(move || {
            if let Err(err) = on_click(store.as_ref(), &handle, &display) {
                warn!("like for post '{}' not recorded: {err}", handle.post_id());
            }
        }))?;
        button.set_attribute(&self.config.wired_attribute, &key)?;

        Ok(ButtonOutcome::Wired)
    }

    fn read_count(&self, key: &str) -> LikeCount {
        match load_count(self.store.as_ref(), key) {
            Ok(count) => count,
            Err(err) => {
                warn!("treating like count as 0: {err}");
                LikeCount::ZERO
            }
        }
    }
}

/// Initialize every like button in `document` with the default markup conventions.
pub fn initialize<D: LikeDocument>(store: Rc<dyn LikeStore>, document: &D) -> InitReport {
    LikeWidget::new(store, WidgetConfig::default()).initialize(document)
}
