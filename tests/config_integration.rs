//! Integration tests for configuration files

use multimaster::config::AppConfig;
use multimaster::MultiMasterError;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("multimaster.toml");
    let config = AppConfig {
        seed: Some(2024),
        tick_rate_ms: 100,
        start_route: "/learn/6".to_string(),
        log_level: "debug".to_string(),
    };

    config.save_to(&path).unwrap();
    assert_eq!(AppConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, MultiMasterError::Config(_)));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_invalid_route_in_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("route.toml");
    fs::write(&path, "start_route = \"/scores\"").unwrap();
    assert!(AppConfig::load_from(&path).is_err());
}
