//! Host document abstraction.
//!
//! The widget only needs four things from the page: find the buttons, read
//! and set attributes, find a button's count display, and attach a click
//! listener. The browser implementation lives in `web`; tests use an
//! in-memory fake.

use crate::error::WidgetError;

/// Click callback attached to a like button.
pub type ClickHandler = Box<dyn FnMut()>;

/// Node whose text mirrors a post's like count.
pub trait CountDisplay {
    fn set_text(&self, text: &str);
}

/// One like button in the host document.
pub trait LikeButtonElement {
    type Display: CountDisplay + 'static;

    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] if the document rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), WidgetError>;

    /// First descendant matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] for an invalid selector.
    fn count_display(&self, selector: &str) -> Result<Option<Self::Display>, WidgetError>;

    /// Run `handler` on every click of this button.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] if the listener cannot be registered.
    fn on_click(&self, handler: ClickHandler) -> Result<(), WidgetError>;
}

/// The page hosting the like buttons.
pub trait LikeDocument {
    type Button: LikeButtonElement;

    /// Every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] for an invalid selector.
    fn like_buttons(&self, selector: &str) -> Result<Vec<Self::Button>, WidgetError>;
}
