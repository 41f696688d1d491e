//! Persisted theme preference and the store abstraction behind it.
//!
//! DESIGN
//! ======
//! The store exposes only `get`/`set` on string keys so the theme controller
//! never touches `localStorage` directly. The browser implementation lives in
//! `browser::LocalStorage`; [`MemoryStore`] backs tests and non-browser hosts.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::UiError;

/// Stored value meaning "dark theme on".
pub const ENABLED: &str = "enabled";
/// Stored value meaning "dark theme off".
pub const DISABLED: &str = "disabled";

/// The persisted dark-theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Enabled,
    Disabled,
}

impl ThemePreference {
    /// Parse a raw stored value. Anything other than the two known literals
    /// is treated as no preference at all.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            ENABLED => Some(Self::Enabled),
            DISABLED => Some(Self::Disabled),
            _ => None,
        }
    }

    /// The literal written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => ENABLED,
            Self::Disabled => DISABLED,
        }
    }

    /// Read the preference under `key`; `Ok(None)` when absent or unrecognized.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying store.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Result<Option<Self>, UiError> {
        Ok(store.get(key)?.as_deref().and_then(Self::parse))
    }

    /// Write this preference under `key`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying store.
    pub fn save<S: PreferenceStore + ?Sized>(self, store: &S, key: &str) -> Result<(), UiError> {
        store.set(key, self.as_str())
    }
}

/// A string key-value store scoped to the page's origin.
///
/// Methods take `&self`: the browser store is a shared handle and the page
/// runs on a single thread.
pub trait PreferenceStore {
    /// Read the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the backing store refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the backing store refuses the write
    /// (quota exceeded, access denied).
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).set(key, value)
    }
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Current value under `key`, if any.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.item(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
