//! Wires both behaviors against a page.
//!
//! `install` is generic so tests drive it with the fake page. With the
//! `hydrate` feature, [`start`] runs it against the live document when the
//! WASM module is instantiated.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::config::UiConfig;
use crate::dom::Document;
use crate::error::UiError;
use crate::message::{self, MessageDismisser};
use crate::storage::PreferenceStore;
use crate::theme::{self, ThemeController};

/// Handles to the installed behaviors.
pub struct Installed<S, D: Document> {
    pub theme: Rc<ThemeController<S, D::Element>>,
    pub message: MessageDismisser<D>,
}

/// Install the theme controller, then the message dismisser.
///
/// The theme is applied before the close control is looked up, so a page
/// without a close control still gets its stored theme.
///
/// # Errors
///
/// Returns the first error from either installation.
pub fn install<D, S>(doc: &D, store: S, config: &UiConfig) -> Result<Installed<S, D>, UiError>
where
    D: Document,
    S: PreferenceStore + 'static,
{
    let theme = theme::install(doc, store, &config.theme)?;
    let message = message::install(doc, &config.message)?;
    Ok(Installed { theme, message })
}

/// WASM entry point.
///
/// # Errors
///
/// Any installation failure is returned to the host as a JS `Error`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    let config = page_config(&document)?;
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::debug!("console logger already installed: {err}");
    }

    let store = crate::browser::LocalStorage::from_window(&window)?;
    install(&document, store, &config)?;
    log::info!("page chrome installed");
    Ok(())
}

/// Configuration embedded in the page, or defaults when there is none.
#[cfg(feature = "hydrate")]
fn page_config(document: &web_sys::Document) -> Result<UiConfig, UiError> {
    let raw = document
        .get_element_by_id(crate::config::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => UiConfig::from_json(&raw),
        None => Ok(UiConfig::default()),
    }
}
