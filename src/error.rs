/// Failures surfaced by the theme toggle.
///
/// Storage absence or a corrupt stored value is never an error; those read
/// as [`crate::Theme::Light`].
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The toggle control is not in the document.
    #[error("toggle element #{0} not found")]
    MissingElement(String),
    /// `document.body` is null.
    #[error("document has no body")]
    MissingBody,
    /// No global `window`, e.g. when running outside a browser.
    #[error("no window available")]
    NoWindow,
    /// `localStorage` is missing, disabled, or threw.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// The host passed a config that failed to parse or validate.
    #[error("invalid toggle config: {0}")]
    Config(String),
}
