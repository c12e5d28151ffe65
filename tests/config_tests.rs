use msgboard::board::SearchScope;
use msgboard::cli::Cli;
use msgboard::config::{AppConfig, ConfigError};
use msgboard::theme::ThemeName;
use clap::Parser;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        base_url = "http://board.local:8080/api"
        request_timeout_secs = 3
        notification_ms = 1500
        theme = "light"
        "#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.base_url, "http://board.local:8080/api");
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.notification_ms, 1500);
    assert_eq!(config.theme, ThemeName::Light);
    assert_eq!(config.exit_transition_ms, 300);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("base_url = [not toml");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("request_timeout_secs = 0");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config(
        r#"
        base_url = "http://from-file:3000"
        search_scope = "title_and_body"
        "#,
    );
    let mut config = AppConfig::load(Some(file.path())).unwrap();

    let cli = Cli::parse_from([
        "msgboard",
        "--config",
        file.path().to_str().unwrap(),
        "--base-url",
        "http://from-cli:4000",
        "--title-only",
    ]);
    cli.apply_overrides(&mut config);

    assert_eq!(cli.config.as_deref(), Some(file.path()));
    assert_eq!(config.base_url, "http://from-cli:4000");
    assert_eq!(config.search_scope, SearchScope::TitleOnly);
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = AppConfig {
        base_url: "http://10.0.0.5:3000".to_string(),
        search_scope: SearchScope::TitleOnly,
        ..AppConfig::default()
    };
    let text = toml::to_string(&config).unwrap();

    let file = write_config(&text);
    assert_eq!(AppConfig::load(Some(file.path())).unwrap(), config);
}
