//! `web-sys` implementations of the page and storage traits.
//!
//! Only compiled with the `hydrate` feature. Click handlers that fail are
//! logged and returned to the page as a JS `Error`, which the browser reports
//! as an uncaught exception.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::dom::{ClickHandler, Document, Element};
use crate::error::UiError;
use crate::storage::PreferenceStore;

fn dom_error(value: JsValue) -> UiError {
    UiError::Dom(format!("{value:?}"))
}

fn storage_error(value: JsValue) -> UiError {
    UiError::Storage(format!("{value:?}"))
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl Element for web_sys::Element {
    fn add_class(&self, class: &str) -> Result<(), UiError> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), UiError> {
        self.class_list().remove_1(class).map_err(dom_error)
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn remove(&self) {
        web_sys::Element::remove(self);
    }

    fn on_click(&self, mut handler: ClickHandler) -> Result<(), UiError> {
        let callback = Closure::<dyn FnMut() -> Result<(), JsValue>>::new(move || {
            handler().map_err(|err| {
                log::error!("click handler failed: {err}");
                JsValue::from(err)
            })
        });
        self.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // Listeners live as long as the page.
        callback.forget();
        Ok(())
    }
}

impl Document for web_sys::Document {
    type Element = web_sys::Element;

    fn query(&self, selector: &str) -> Result<Option<web_sys::Element>, UiError> {
        self.query_selector(selector).map_err(dom_error)
    }
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns [`UiError::StorageUnavailable`] when the window has no local
    /// storage, or [`UiError::Storage`] when accessing it throws.
    pub fn from_window(window: &web_sys::Window) -> Result<Self, UiError> {
        let storage = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or(UiError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }
}
