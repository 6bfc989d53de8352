use super::*;
use crate::theme::Theme;

#[test]
fn empty_store_reads_none_and_light() {
    let store = MemoryStore::new("theme");
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(store.load_theme().unwrap(), Theme::Light);
    assert!(store.is_empty());
}

#[test]
fn save_theme_writes_canonical_string_under_key() {
    let mut store = MemoryStore::new("site-theme");
    store.save_theme(Theme::Dark).unwrap();
    assert_eq!(store.raw(), Some("dark"));
    assert_eq!(store.raw_at("site-theme"), Some("dark"));
    assert_eq!(store.raw_at("theme"), None);

    store.save_theme(Theme::Light).unwrap();
    assert_eq!(store.raw(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn seeded_garbage_loads_as_light() {
    let store = MemoryStore::seeded("theme", "midnight");
    assert_eq!(store.raw(), Some("midnight"));
    assert_eq!(store.load_theme().unwrap(), Theme::Light);
}

#[test]
fn view_starts_light_with_moon() {
    let view = MemoryView::default();
    assert!(!view.is_dark().unwrap());
    assert_eq!(view.icon(), Some(Icon::Moon));
    assert_eq!(view.icon_writes(), 0);
}

#[test]
fn toggle_dark_flips_membership() {
    let mut view = MemoryView::default();
    view.toggle_dark().unwrap();
    assert!(view.has_class("dark-mode"));
    view.toggle_dark().unwrap();
    assert!(!view.has_class("dark-mode"));
}

#[test]
fn add_dark_is_idempotent() {
    let mut view = MemoryView::default();
    view.add_dark().unwrap();
    view.add_dark().unwrap();
    assert!(view.is_dark().unwrap());
    view.toggle_dark().unwrap();
    assert!(!view.is_dark().unwrap());
}

#[test]
fn toggle_leaves_other_classes_alone() {
    let mut view = MemoryView::default();
    view.add_class("has-sidebar");
    view.toggle_dark().unwrap();
    view.toggle_dark().unwrap();
    assert!(view.has_class("has-sidebar"));
}

#[test]
fn set_icon_renders_configured_markup() {
    let config = ToggleConfig::from_json(r#"{"icons":{"sun":"☀","moon":"☾"}}"#).unwrap();
    let mut view = MemoryView::new(&config);
    assert_eq!(view.markup(), "☾");
    view.set_icon(Icon::Sun).unwrap();
    assert_eq!(view.markup(), "☀");
    assert_eq!(view.icon(), Some(Icon::Sun));
    assert_eq!(view.icon_writes(), 1);
}

#[test]
fn default_store_uses_stock_key() {
    let mut store = MemoryStore::default();
    store.save_theme(Theme::Dark).unwrap();
    assert_eq!(store.raw_at(crate::config::DEFAULT_STORAGE_KEY), Some("dark"));
}
