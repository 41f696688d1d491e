//! Error type shared by every fallible operation in the crate.
//!
//! Nothing here recovers locally. Errors raised during start-up are returned
//! from the WASM entry point; errors raised inside a click handler are
//! returned from the listener to the host page (see `browser`).

/// Failure while wiring or running page behavior.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element is not present in the page.
    #[error("required element not found: {0}")]
    MissingElement(String),
    /// The preference store rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// `window.localStorage` is null (disabled or sandboxed).
    #[error("preference storage unavailable")]
    StorageUnavailable,
    /// No global `window` object.
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Page-supplied configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    /// Build a [`UiError::MissingElement`] for `selector`.
    #[must_use]
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement(selector.to_owned())
    }
}
