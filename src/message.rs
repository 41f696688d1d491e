//! Flash message dismissal.
//!
//! The close control is required: installing on a page without one fails.
//! The message itself is looked up at click time and removed outright.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::config::MessageConfig;
use crate::dom::{Document, Element};
use crate::error::UiError;

/// Removes the flash message from a page.
#[derive(Clone)]
pub struct MessageDismisser<D> {
    doc: D,
    selector: String,
}

impl<D: Document> MessageDismisser<D> {
    #[must_use]
    pub fn new(doc: D, selector: &str) -> Self {
        Self { doc, selector: selector.to_owned() }
    }

    /// Remove the message element from the page.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when no message is present.
    pub fn dismiss(&self) -> Result<(), UiError> {
        let message = self.doc.require(&self.selector)?;
        message.remove();
        log::debug!("dismissed {}", self.selector);
        Ok(())
    }
}

/// Attach the dismiss handler to the close control.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the close control is absent.
pub fn install<D: Document>(doc: &D, config: &MessageConfig) -> Result<MessageDismisser<D>, UiError> {
    let close = doc.require(&config.close_selector)?;
    let dismisser = MessageDismisser::new(doc.clone(), &config.message_selector);
    let handler = dismisser.clone();
    close.on_click(Box::new(move || handler.dismiss()))?;
    log::info!("message close wired to {}", config.close_selector);
    Ok(dismisser)
}
