//! Browser bindings: `localStorage`, the live DOM and wasm entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is thin glue
//! from web-sys onto the traits in `store` and `dom`; behavior lives in
//! `widget` so it stays testable without a browser.

use std::rc::Rc;

use log::{Level, debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use crate::config::WidgetConfig;
use crate::dom::{ClickHandler, CountDisplay, LikeButtonElement, LikeDocument};
use crate::error::{StoreError, WidgetError};
use crate::store::{LikeStore, MemoryStore};
use crate::widget::{InitReport, LikeWidget};

/// Id of an optional `<script type="application/json">` holding widget config.
pub const CONFIG_ELEMENT_ID: &str = "like-widget-config";

thread_local! {
    // Shared by every init pass so counts stay consistent when storage is off.
    static FALLBACK_STORE: Rc<MemoryStore> = Rc::new(MemoryStore::new());
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn dom_error(err: JsValue) -> WidgetError {
    WidgetError::Dom(js_message(&err))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================
// Storage
// =============================================================

/// `window.localStorage` as a [`LikeStore`].
pub struct BrowserStorage(Storage);

impl BrowserStorage {
    /// Obtain the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage access throws or is
    /// not provided (sandboxed iframes, some privacy modes).
    pub fn from_window(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            Ok(None) => Err(StoreError::Unavailable("localStorage is not provided".into())),
            Err(err) => Err(StoreError::Unavailable(js_message(&err))),
        }
    }
}

impl LikeStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0
            .get_item(key)
            .map_err(|err| StoreError::Read { key: key.to_owned(), message: js_message(&err) })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0
            .set_item(key, value)
            .map_err(|err| StoreError::Write { key: key.to_owned(), message: js_message(&err) })
    }
}

fn page_store(window: &Window) -> Rc<dyn LikeStore> {
    match BrowserStorage::from_window(window) {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            warn!("{err}; likes will only last for this page view");
            FALLBACK_STORE.with(|store| Rc::clone(store) as Rc<dyn LikeStore>)
        }
    }
}

// =============================================================
// DOM
// =============================================================

pub struct BrowserDisplay(Element);

impl CountDisplay for BrowserDisplay {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

pub struct BrowserButton(Element);

impl LikeButtonElement for BrowserButton {
    type Display = BrowserDisplay;

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), WidgetError> {
        self.0.set_attribute(name, value).map_err(dom_error)
    }

    fn count_display(&self, selector: &str) -> Result<Option<BrowserDisplay>, WidgetError> {
        let found = self.0.query_selector(selector).map_err(dom_error)?;
        Ok(found.map(BrowserDisplay))
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), WidgetError> {
        let closure = Closure::wrap(handler);
        self.0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // The listener lives as long as the page.
        closure.forget();
        Ok(())
    }
}

pub struct BrowserDocument(Document);

impl LikeDocument for BrowserDocument {
    type Button = BrowserButton;

    fn like_buttons(&self, selector: &str) -> Result<Vec<BrowserButton>, WidgetError> {
        let nodes = self.0.query_selector_all(selector).map_err(dom_error)?;
        let buttons = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .map(BrowserButton)
            .collect();
        Ok(buttons)
    }
}

fn embedded_config(document: &Document) -> WidgetConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return WidgetConfig::default();
    };
    match WidgetConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            WidgetConfig::default()
        }
    }
}

// =============================================================
// Entry points
// =============================================================

fn page() -> Result<(Window, Document), WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| WidgetError::Dom("no document".into()))?;
    Ok((window, document))
}

fn initialize_page(config: Option<WidgetConfig>) -> Result<InitReport, WidgetError> {
    let (window, document) = page()?;
    let config = config.unwrap_or_else(|| embedded_config(&document));
    let widget = LikeWidget::new(page_store(&window), config);
    Ok(widget.initialize(&BrowserDocument(document)))
}

fn initialize_on_load() {
    if let Err(err) = initialize_page(None) {
        warn!("like buttons not initialized: {err}");
    }
}

/// Module start: set up logging and initialize like buttons once the page loads.
///
/// # Errors
///
/// Fails only when there is no window or document to attach to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(Level::Info) {
        // The host bundle installed its own logger; keep it.
        debug!("console logger not installed: {err}");
    }

    let (window, document) = page().map_err(js_error)?;
    if document.ready_state() == "complete" {
        initialize_on_load();
        return Ok(());
    }

    let on_load = Closure::once_into_js(initialize_on_load);
    window.add_event_listener_with_callback("load", on_load.unchecked_ref())
}

/// Initialize like buttons added after page load. Returns how many were newly wired.
///
/// # Errors
///
/// Fails when there is no window or document.
#[wasm_bindgen(js_name = initLikeButtons)]
pub fn init_like_buttons() -> Result<usize, JsValue> {
    let report = initialize_page(None).map_err(js_error)?;
    Ok(report.wired)
}

/// Like [`init_like_buttons`] with an explicit JSON config.
///
/// # Errors
///
/// Fails for invalid config or when there is no window or document.
#[wasm_bindgen(js_name = initLikeButtonsWithConfig)]
pub fn init_like_buttons_with_config(config_json: &str) -> Result<usize, JsValue> {
    let config = WidgetConfig::from_json(config_json).map_err(js_error)?;
    let report = initialize_page(Some(config)).map_err(js_error)?;
    Ok(report.wired)
}
