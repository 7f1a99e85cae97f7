use super::{parse_log_level, Config, ConfigError, EXPOSE_INTERNAL_ERRORS, LOCALE};

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use tracing::level_filters::LevelFilter;

use crate::errors::Locale;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn load(values: &[&str], variables: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let variables: HashMap<String, String> = variables.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Config::from_sources(&args(values), |name| variables.get(name).cloned())
}

#[test]
fn test_defaults_apply_without_optional_sources() -> Result<()> {
    let config = load(&["upload-validator", "records.csv"], &[])?;

    assert_eq!(config.input, PathBuf::from("records.csv"));
    assert_eq!(config.log_level, LevelFilter::ERROR);
    assert!(!config.expose_internal_errors);
    assert_eq!(config.locale, Locale::English);

    Ok(())
}

#[test]
fn test_all_sources_are_read() -> Result<()> {
    let config = load(
        &["upload-validator", "records.json", "debug"],
        &[(EXPOSE_INTERNAL_ERRORS, "yes"), (LOCALE, "nl")]
    )?;

    assert_eq!(config.log_level, LevelFilter::DEBUG);
    assert!(config.expose_internal_errors);
    assert_eq!(config.locale, Locale::Dutch);

    Ok(())
}

#[test]
fn test_missing_input_is_rejected() {
    assert_eq!(load(&["upload-validator"], &[]), Err(ConfigError::MissingInput));
}

#[test]
fn test_invalid_variables_are_rejected() {
    let flag = load(&["upload-validator", "a.csv"], &[(EXPOSE_INTERNAL_ERRORS, "sometimes")]);
    let locale = load(&["upload-validator", "a.csv"], &[(LOCALE, "fr")]);

    assert!(matches!(flag, Err(ConfigError::InvalidVariable { name, .. }) if name == EXPOSE_INTERNAL_ERRORS));
    assert!(matches!(locale, Err(ConfigError::InvalidVariable { name, .. }) if name == LOCALE));
}

#[test]
fn test_log_levels_parse_case_insensitively() {
    let test_cases = [
        ("trace", LevelFilter::TRACE),
        ("DEBUG", LevelFilter::DEBUG),
        ("Info", LevelFilter::INFO),
        ("warn", LevelFilter::WARN),
        ("error", LevelFilter::ERROR),
        ("verbose", LevelFilter::ERROR)
    ];

    for (level, expected) in test_cases {
        assert_eq!(parse_log_level(level), expected);
    }
}
