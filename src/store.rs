//! Persisted theme preference.

use crate::error::ThemeError;
use crate::theme::Theme;

/// Durable, page-scoped storage for the single theme entry.
///
/// Implementations own the key; callers only see the value.
pub trait ThemeStore {
    /// Raw stored value, `None` if nothing has been written yet.
    fn get(&self) -> Result<Option<String>, ThemeError>;

    /// Overwrite the stored value.
    fn set(&mut self, value: &str) -> Result<(), ThemeError>;

    fn load_theme(&self) -> Result<Theme, ThemeError> {
        Ok(Theme::from_stored(self.get()?.as_deref()))
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.set(theme.as_str())
    }
}
