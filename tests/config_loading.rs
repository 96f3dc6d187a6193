use std::path::PathBuf;

use steamer_client::common::config::{
    ClientConfig, ConfigError, DEFAULT_ORIGIN, SettingsConfig, SettingsMode,
};

fn write_temp(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("steamer-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.origin, DEFAULT_ORIGIN);
    assert_eq!(config.timeout(), None);
    assert_eq!(config.settings, SettingsConfig::default());
    assert_eq!(config.settings.mode, SettingsMode::Simple);
    assert!(!config.settings.prefill_tag_lists);
}

#[test]
fn test_load_partial_file() {
    let path = write_temp(
        r#"{
            "origin": "http://192.168.1.20:8080",
            "settings": { "mode": "tag-list" }
        }"#,
    );

    let config = ClientConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.origin, "http://192.168.1.20:8080");
    assert_eq!(config.settings.mode, SettingsMode::TagList);
    assert!(!config.settings.prefill_tag_lists);
    assert_eq!(config.timeout_secs, None);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("steamer-does-not-exist.json");
    let result = ClientConfig::load_or_default(Some(&path));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let path = write_temp("{ not json");
    let result = ClientConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_origin_drops_path() {
    let config = ClientConfig {
        origin: "http://steamer.local:5000/app/440?x=1".to_string(),
        ..Default::default()
    };
    assert_eq!(
        config.origin_url().unwrap().as_str(),
        "http://steamer.local:5000/"
    );
}

#[test]
fn test_origin_rejects_other_schemes() {
    for origin in ["ftp://steamer.local", "not a url"] {
        let config = ClientConfig {
            origin: origin.to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.origin_url(),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }
}

#[test]
fn test_timeout_conversion() {
    let config = ClientConfig {
        timeout_secs: Some(15),
        ..Default::default()
    };
    assert_eq!(config.timeout(), Some(std::time::Duration::from_secs(15)));
}
