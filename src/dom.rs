//! Minimal page-structure interface used by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers are written against these traits rather than `web-sys` so the
//! same code runs against the live page (`browser`) and against the in-memory
//! fake used in tests.
//!
//! Lookups distinguish optional from required elements: [`Document::query`]
//! reports absence as `None`, [`Document::require`] turns it into
//! [`UiError::MissingElement`]. Each caller picks one deliberately.

#[cfg(test)]
#[path = "dom_fake.rs"]
pub(crate) mod fake;

use crate::error::UiError;

/// Callback run when an element is activated.
pub type ClickHandler = Box<dyn FnMut() -> Result<(), UiError>>;

/// A single element in the page.
pub trait Element: Clone + 'static {
    /// Add `class` to the element's class set.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the class token is rejected.
    fn add_class(&self, class: &str) -> Result<(), UiError>;

    /// Remove `class` from the element's class set. Removing an absent class
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the class token is rejected.
    fn remove_class(&self, class: &str) -> Result<(), UiError>;

    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Detach the element from the page.
    fn remove(&self);

    /// Run `handler` every time the element is clicked.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the listener cannot be attached.
    fn on_click(&self, handler: ClickHandler) -> Result<(), UiError>;
}

/// Selector-based access to the page.
pub trait Document: Clone + 'static {
    type Element: Element;

    /// First element matching `selector`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the selector is invalid.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, UiError>;

    /// First element matching `selector`, failing when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when nothing matches, or any error
    /// from [`Document::query`].
    fn require(&self, selector: &str) -> Result<Self::Element, UiError> {
        self.query(selector)?.ok_or_else(|| UiError::missing(selector))
    }
}
