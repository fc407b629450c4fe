use super::*;
use tempfile::tempdir;

#[test]
fn defaults_match_documented_values() {
    let settings = FindSettings::default();
    assert!(!settings.case_sensitive);
    assert_eq!(settings.locale, StatusLocale::En);
    assert_eq!(settings.status_clear_delay(), Duration::from_secs(3));
    assert_eq!(settings.viewport_lines, 20);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "locale": "zh", "case_sensitive": true }"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(settings.case_sensitive);
    assert_eq!(settings.locale, StatusLocale::Zh);
    assert_eq!(settings.status_clear_ms, 3000);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err.to_string().starts_with("invalid settings file"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    match err {
        SettingsError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".zfind").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), FindSettings::default());

    std::fs::write(&path, r#"{ "viewport_lines": 5 }"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().viewport_lines, 5);
}
