//! Integration tests for config file loading

use std::time::Duration;

use tempfile::TempDir;
use termseq::Config;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_values_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[query]\ntimeout_ms = 750\npoll_interval_ms = 10\n\n[flush]\nreset_attributes = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert!(config.flush.reset_attributes);
    let options = config.query_options();
    assert_eq!(options.timeout, Some(Duration::from_millis(750)));
    assert_eq!(options.poll_interval, Duration::from_millis(10));
}

#[test]
fn invalid_file_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[query\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("Invalid config file"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.query.timeout_ms = 0;

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
    assert_eq!(Config::load_from(&path).unwrap().query_options().timeout, None);
}

#[test]
fn config_path_ends_with_crate_dir() {
    if let Ok(path) = Config::config_path() {
        assert!(path.ends_with("termseq/config.toml"));
    }
}
