//! Light/dark toggle driven by an injected store and view.
//!
//! The view's class membership is the only record of the current theme.
//! A click mutates the view first, reads the result back, and only then
//! updates the icon and persists. No separate flag is kept that could drift
//! from what the page shows.

use crate::error::ThemeError;
use crate::store::ThemeStore;
use crate::theme::Theme;
use crate::view::ThemeView;

#[cfg(test)]
#[path = "toggler_test.rs"]
mod toggler_test;

pub struct ThemeToggler<S, V> {
    store: S,
    view: V,
}

impl<S: ThemeStore, V: ThemeView> ThemeToggler<S, V> {
    #[must_use]
    pub fn new(store: S, view: V) -> Self {
        Self { store, view }
    }

    /// Apply the persisted preference to a freshly loaded page.
    ///
    /// A stored `"dark"` adds the dark class and shows the sun icon. Anything
    /// else leaves the page's stock light styling and moon icon untouched.
    ///
    /// # Errors
    ///
    /// Returns the view's error if applying dark styling fails.
    pub fn initialize(&mut self) -> Result<Theme, ThemeError> {
        let theme = self.stored_theme();
        if theme.is_dark() {
            self.view.add_dark()?;
            self.view.set_icon(theme.icon())?;
        }
        log::debug!("theme initialized: {theme}");
        Ok(theme)
    }

    /// Flip the theme in response to a click on the toggle control.
    ///
    /// # Errors
    ///
    /// Returns the view's error if the class or icon cannot be updated.
    /// Storage failures are logged and do not fail the click.
    pub fn handle_toggle_click(&mut self) -> Result<Theme, ThemeError> {
        self.view.toggle_dark()?;
        let theme = self.current()?;
        self.view.set_icon(theme.icon())?;
        if let Err(e) = self.store.save_theme(theme) {
            log::warn!("failed to persist theme {theme}: {e}");
        }
        log::debug!("theme toggled: {theme}");
        Ok(theme)
    }

    /// Theme currently shown by the view.
    ///
    /// # Errors
    ///
    /// Returns the view's error if its state cannot be read.
    pub fn current(&self) -> Result<Theme, ThemeError> {
        Ok(if self.view.is_dark()? { Theme::Dark } else { Theme::Light })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    fn stored_theme(&self) -> Theme {
        match self.store.load_theme() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("failed to read stored theme, using light: {e}");
                Theme::Light
            }
        }
    }
}
