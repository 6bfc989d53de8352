//! Visible theme state.

use crate::error::ThemeError;
use crate::theme::Icon;

/// The page surface the toggle drives: a dark-mode class on the root element
/// and an icon inside the toggle control.
///
/// The class membership is the source of truth for the current theme.
pub trait ThemeView {
    /// Ensure the dark class is present.
    fn add_dark(&mut self) -> Result<(), ThemeError>;

    /// Flip dark class membership.
    fn toggle_dark(&mut self) -> Result<(), ThemeError>;

    fn is_dark(&self) -> Result<bool, ThemeError>;

    /// Replace the toggle control's content with `icon`.
    fn set_icon(&mut self, icon: Icon) -> Result<(), ThemeError>;
}
