use logfacade::{Encoding, Error, Level, LoggerConfig, Output};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logger_config_default() {
    let config = LoggerConfig::default();

    assert_eq!(config.level, Level::Debug);
    assert_eq!(config.encoding, Encoding::Console);
    assert_eq!(config.output, Output::Stdout);
    assert!(config.color);
    assert!(config.caller);
    assert!(config.stacktrace);
    assert_eq!(config.stacktrace_level, Level::Error);
    assert!(!config.buffered);
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("logging.toml");

    let config = LoggerConfig {
        level: Level::Info,
        encoding: Encoding::Json,
        output: Output::Stderr,
        stacktrace_level: Level::Panic,
        ..LoggerConfig::default()
    };
    config.save(&path).expect("save should create parent directories");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#"level = "info""#));
    assert!(content.contains(r#"encoding = "json""#));

    let loaded = LoggerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::ReadConfig { .. }));
    assert!(err.to_string().contains("absent.toml"));

    assert_eq!(LoggerConfig::load_or_default(&path), LoggerConfig::default());
}

#[test]
fn test_config_load_corrupted_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logging.toml");
    fs::write(&path, "level = [not valid toml").unwrap();

    assert!(matches!(
        LoggerConfig::load(&path).unwrap_err(),
        Error::ParseConfig(_)
    ));
    assert_eq!(LoggerConfig::load_or_default(&path), LoggerConfig::default());
}

#[test]
fn test_config_accepts_level_alias() {
    let config = LoggerConfig::from_toml_str(r#"level = "warning""#).unwrap();
    assert_eq!(config.level, Level::Warn);
}

#[test]
fn test_config_builds_matching_logger() {
    let config = LoggerConfig::from_toml_str(
        r#"
        level = "error"
        color = false
        stacktrace = false
        buffered = true
        "#,
    )
    .unwrap();

    let logger = config.build();
    assert_eq!(logger.level(), Level::Error);
    assert!(!logger.enabled(Level::Warn));
    assert!(logger.enabled(Level::Fatal));
    logger.sync().expect("flushing an empty stdout buffer succeeds");
}
