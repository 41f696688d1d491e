//! Dark/light theme controller.
//!
//! Reads the stored preference at load, applies the dark marker class to the
//! page root, and flips it on each activation of the optional toggle control.
//! The toggle label always names the theme the next click will switch to.
//!
//! TRADE-OFFS
//! ==========
//! Every toggle re-reads the store instead of trusting in-memory state, so a
//! preference written by another tab is honored on the next click. Two tabs
//! writing concurrently resolve last-write-wins.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::dom::{Document, Element};
use crate::error::UiError;
use crate::storage::{PreferenceStore, ThemePreference};

/// Applied visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme implied by a stored preference. No preference means light, so
    /// the first toggle on a fresh store switches to dark.
    #[must_use]
    pub fn from_preference(pref: Option<ThemePreference>) -> Self {
        match pref {
            Some(ThemePreference::Enabled) => Self::Dark,
            Some(ThemePreference::Disabled) | None => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Light => ThemePreference::Disabled,
            Self::Dark => ThemePreference::Enabled,
        }
    }
}

/// Owns the preference store and the elements the theme touches.
pub struct ThemeController<S, E> {
    store: S,
    root: E,
    toggle: Option<E>,
    config: ThemeConfig,
}

impl<S: PreferenceStore, E: Element> ThemeController<S, E> {
    #[must_use]
    pub fn new(store: S, root: E, toggle: Option<E>, config: ThemeConfig) -> Self {
        Self { store, root, toggle, config }
    }

    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    /// Theme currently recorded in the store.
    ///
    /// # Errors
    ///
    /// Propagates store read failures.
    pub fn current(&self) -> Result<Theme, UiError> {
        let pref = ThemePreference::load(&self.store, &self.config.storage_key)?;
        Ok(Theme::from_preference(pref))
    }

    /// Apply the stored theme at page load.
    ///
    /// Only a stored dark preference mutates the page and the store; the
    /// light case just syncs the toggle label.
    ///
    /// # Errors
    ///
    /// Propagates store and DOM failures.
    pub fn initialize(&self) -> Result<Theme, UiError> {
        let theme = self.current()?;
        match theme {
            Theme::Dark => self.apply(theme)?,
            Theme::Light => self.set_label(theme),
        }
        log::debug!("theme initialized: {theme:?}");
        Ok(theme)
    }

    /// Flip the theme based on a fresh read of the store and persist it.
    ///
    /// # Errors
    ///
    /// Propagates store and DOM failures.
    pub fn toggle(&self) -> Result<Theme, UiError> {
        let next = self.current()?.toggled();
        self.apply(next)?;
        log::debug!("theme toggled: {next:?}");
        Ok(next)
    }

    fn apply(&self, theme: Theme) -> Result<(), UiError> {
        match theme {
            Theme::Dark => self.root.add_class(&self.config.dark_class)?,
            Theme::Light => self.root.remove_class(&self.config.dark_class)?,
        }
        theme.preference().save(&self.store, &self.config.storage_key)?;
        self.set_label(theme);
        Ok(())
    }

    fn set_label(&self, theme: Theme) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let label = match theme {
            Theme::Light => &self.config.dark_label,
            Theme::Dark => &self.config.light_label,
        };
        toggle.set_text(label);
    }
}

/// Locate the theme elements, apply the stored theme, and wire the toggle.
///
/// A missing toggle control leaves the feature inert; a missing page root is
/// an error.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] for a missing root, or any store/DOM
/// failure from initialization.
pub fn install<D, S>(doc: &D, store: S, config: &ThemeConfig) -> Result<Rc<ThemeController<S, D::Element>>, UiError>
where
    D: Document,
    S: PreferenceStore + 'static,
{
    let root = doc.require(&config.root_selector)?;
    let toggle = doc.query(&config.toggle_selector)?;
    let controller = Rc::new(ThemeController::new(store, root, toggle, config.clone()));
    controller.initialize()?;

    match &controller.toggle {
        Some(toggle) => {
            let handle = Rc::clone(&controller);
            toggle.on_click(Box::new(move || handle.toggle().map(|_| ())))?;
            log::info!("theme toggle wired to {}", config.toggle_selector);
        }
        None => log::warn!("no theme toggle matching {}; toggle disabled", config.toggle_selector),
    }
    Ok(controller)
}
