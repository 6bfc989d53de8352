use super::*;
use crate::theme::Icon;

#[test]
fn defaults_match_stock_markup() {
    let config = ToggleConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.dark_class, "dark-mode");
    assert_eq!(config.icons, IconSet::default());
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ToggleConfig::from_json("{}").unwrap(), ToggleConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let config = ToggleConfig::from_json(r#"{"storage_key":"site-theme","icons":{"sun":"S"}}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.icons.markup(Icon::Sun), "S");
    assert_eq!(config.icons.markup(Icon::Moon), r#"<i class="fas fa-moon"></i>"#);
}

#[test]
fn malformed_json_is_config_error() {
    let err = ToggleConfig::from_json("{storage_key:").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"storage":"x"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn empty_field_is_rejected_by_name() {
    let err = ToggleConfig::from_json(r#"{"dark_class":"  "}"#).unwrap_err();
    match err {
        ThemeError::Config(msg) => assert!(msg.contains("dark_class"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn dark_class_with_inner_space_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"dark_class":"dark mode"}"#).unwrap_err();
    match err {
        ThemeError::Config(msg) => assert!(msg.contains("dark_class"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn dark_class_with_tab_or_padding_is_rejected() {
    for class in [r"dark\tmode", " dark", r"dark\n"] {
        let json = format!(r#"{{"dark_class":"{class}"}}"#);
        assert!(ToggleConfig::from_json(&json).is_err(), "class {class:?}");
    }
}

#[test]
fn hyphenated_dark_class_is_accepted() {
    let config = ToggleConfig::from_json(r#"{"dark_class":"theme--dark"}"#).unwrap();
    assert_eq!(config.dark_class, "theme--dark");
}
