use setupkit_core::MeasurementSystem;
use setupkit_settings::{Config, SettingsError};
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_config() -> Config {
    let mut config = Config::default();
    config.units.xyz = MeasurementSystem::Imperial;
    config.tool.end_mill_diameter = 12.7;
    config.canvas.width = 1024;
    config.history.export_path = Some(PathBuf::from("/tmp/setup_history.txt"));
    config
}

#[test]
fn test_save_and_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = sample_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_load_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = sample_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [canvas]
        width = 800
        height = 600
        margin_ratio = 0.75
        "#,
    )
    .unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::JsonError(_)));
}

#[test]
fn test_default_path_location() {
    if let Ok(path) = Config::default_path() {
        assert!(path.ends_with("setupkit/config.toml"));
    }
}
