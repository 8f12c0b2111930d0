use natal_kernel::config::{ConfigError, load_config};
use natal_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9100

[cors]
allow_origins = ["https://natal.example"]

[chart]
client_errors = true
max_year = 2500
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 9100);
    assert!(cfg.server.address.is_unspecified());
    assert_eq!(cfg.cors.allow_origins, vec!["https://natal.example".to_owned()]);
    assert!(cfg.cors.allow_credentials);
    assert!(cfg.chart.client_errors);
    assert_eq!((cfg.chart.min_year, cfg.chart.max_year), (1000, 2500));
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
fn json_files_are_detected_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("natal.json");
    fs::write(&path, r#"{ "logging": { "level": "debug", "json": true } }"#)?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.server.port, 8000);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let result: Result<ApiConfig, ConfigError> = load_config(Some(&missing));
    let err = result.expect_err("missing explicit file must fail");
    assert!(err.to_string().starts_with("Config error (Failed to build config)"), "{err}");
}

#[test]
fn default_file_is_optional() {
    // No `server.*` file lives next to this crate's manifest
    let cfg: ApiConfig = load_config(None::<&str>).expect("defaults");
    assert_eq!(cfg.server.port, 8000);
}

#[test]
fn type_mismatch_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n")?;

    let result: Result<ApiConfig, ConfigError> = load_config(Some(&path));
    let err = result.expect_err("bad port must fail");
    assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
    Ok(())
}
