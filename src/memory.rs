//! In-process store and view.
//!
//! Used by non-browser hosts and by the test suite. Both mirror the browser
//! behavior closely: the store is keyed like `localStorage`, and the view
//! starts in the page's stock state (no dark class, moon icon).

use std::collections::{BTreeSet, HashMap};

use crate::config::{DEFAULT_STORAGE_KEY, ToggleConfig};
use crate::error::ThemeError;
use crate::store::ThemeStore;
use crate::theme::{Icon, IconSet};
use crate::view::ThemeView;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Key-value map standing in for `localStorage`.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key: String,
    entries: HashMap<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: HashMap::new() }
    }

    /// Store with `value` already written under `key`.
    #[must_use]
    pub fn seeded(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new(key);
        store.entries.insert(store.key.clone(), value.into());
        store
    }

    /// Value under this store's key.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.entries.get(&self.key).map(String::as_str)
    }

    /// Value under an arbitrary key.
    #[must_use]
    pub fn raw_at(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(&self.key).cloned())
    }

    fn set(&mut self, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(self.key.clone(), value.to_owned());
        Ok(())
    }
}

/// Body class list plus toggle markup.
#[derive(Clone, Debug)]
pub struct MemoryView {
    dark_class: String,
    icons: IconSet,
    classes: BTreeSet<String>,
    markup: String,
    icon_writes: usize,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new(&ToggleConfig::default())
    }
}

impl MemoryView {
    #[must_use]
    pub fn new(config: &ToggleConfig) -> Self {
        Self {
            dark_class: config.dark_class.clone(),
            icons: config.icons.clone(),
            classes: BTreeSet::new(),
            markup: config.icons.markup(Icon::Moon).to_owned(),
            icon_writes: 0,
        }
    }

    /// Add an unrelated class, as other page scripts would.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Current toggle content.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Icon matching the current markup, if it is one of the configured glyphs.
    #[must_use]
    pub fn icon(&self) -> Option<Icon> {
        [Icon::Sun, Icon::Moon]
            .into_iter()
            .find(|icon| self.icons.markup(*icon) == self.markup)
    }

    /// Number of times the toggle content was replaced.
    #[must_use]
    pub fn icon_writes(&self) -> usize {
        self.icon_writes
    }
}

impl ThemeView for MemoryView {
    fn add_dark(&mut self) -> Result<(), ThemeError> {
        self.classes.insert(self.dark_class.clone());
        Ok(())
    }

    fn toggle_dark(&mut self) -> Result<(), ThemeError> {
        if !self.classes.remove(&self.dark_class) {
            self.classes.insert(self.dark_class.clone());
        }
        Ok(())
    }

    fn is_dark(&self) -> Result<bool, ThemeError> {
        Ok(self.classes.contains(&self.dark_class))
    }

    fn set_icon(&mut self, icon: Icon) -> Result<(), ThemeError> {
        self.icons.markup(icon).clone_into(&mut self.markup);
        self.icon_writes += 1;
        Ok(())
    }
}
