use super::*;

#[test]
fn default_uses_page_names() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.storage_key, "darkmode");
    assert_eq!(cfg.dark_class, "forcedark");
    assert_eq!(cfg.light_class, "forcelight");
    assert_eq!(cfg.toggle_button_id, "toggle-dark-mode-button");
    assert_eq!(cfg.dark_scheme_query, "(prefers-color-scheme: dark)");
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_overrides_only_named_fields() {
    let cfg = ThemeConfig::from_json(r#"{"storage_key":"site-dark","toggle_button_id":"theme-btn"}"#).unwrap();
    assert_eq!(cfg.storage_key, "site-dark");
    assert_eq!(cfg.toggle_button_id, "theme-btn");
    assert_eq!(cfg.dark_class, "forcedark");
    assert_eq!(cfg.light_class, "forcelight");
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = ThemeConfig::from_json(r#"{"storage":"x"}"#).unwrap_err().to_string();
    assert!(err.contains("unknown field"), "{err}");
}

#[test]
fn validate_rejects_empty_values() {
    let err = ThemeConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err().to_string();
    assert!(err.contains("storage_key must not be empty"), "{err}");
}

#[test]
fn validate_rejects_identical_markers() {
    let err = ThemeConfig::from_json(r#"{"dark_class":"same","light_class":"same"}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("must differ"), "{err}");
}

#[test]
fn validate_rejects_class_with_whitespace() {
    let err = ThemeConfig::from_json(r#"{"dark_class":"force dark"}"#).unwrap_err().to_string();
    assert!(err.contains("dark_class must be a single class name"), "{err}");
}

#[test]
fn console_level_keeps_warnings() {
    assert!(log::Level::Warn <= console_log_level());
}

#[cfg(debug_assertions)]
#[test]
fn console_level_shows_debug_messages_in_debug_builds() {
    assert_eq!(console_log_level(), log::Level::Debug);
    assert!(log::Level::Debug <= console_log_level());
}
