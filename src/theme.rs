//! Theme preference and the toggle icon that advertises the next action.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a raw stored value.
    ///
    /// Only the exact string `"dark"` selects [`Theme::Dark`]. Absence and
    /// every other value, including case variants, fall back to light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Canonical persisted form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
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
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the toggle while this theme is active.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Moon,
            Self::Dark => Icon::Sun,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph rendered inside the toggle control.
///
/// The glyph names the theme a click switches *to*: a sun while dark, a moon
/// while light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
}

/// Markup used to render each [`Icon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSet {
    pub sun: String,
    pub moon: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            sun: r#"<i class="fas fa-sun"></i>"#.to_owned(),
            moon: r#"<i class="fas fa-moon"></i>"#.to_owned(),
        }
    }
}

impl IconSet {
    #[must_use]
    pub fn markup(&self, icon: Icon) -> &str {
        match icon {
            Icon::Sun => &self.sun,
            Icon::Moon => &self.moon,
        }
    }
}
