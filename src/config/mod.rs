#[cfg(test)]
mod tests;

use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::errors::Locale;

pub const EXPOSE_INTERNAL_ERRORS: &str = "UPLOAD_VALIDATOR_EXPOSE_INTERNAL_ERRORS";
pub const LOCALE: &str = "UPLOAD_VALIDATOR_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing input file")]
    MissingInput,
    #[error("Invalid value '{value}' for {name}")]
    InvalidVariable { name: &'static str, value: String }
}

/// Runtime settings, taken from the command line and the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub log_level: LevelFilter,
    pub expose_internal_errors: bool,
    pub locale: Locale
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_sources(&args, |name| std::env::var(name).ok())
    }

    /// `args` includes the program name, like `std::env::args`.
    pub fn from_sources(args: &[String], variable: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let input = args.get(1).ok_or(ConfigError::MissingInput)?;
        let log_level = args.get(2)
            .map(|level| parse_log_level(level)).unwrap_or(LevelFilter::ERROR);

        let expose_internal_errors = match variable(EXPOSE_INTERNAL_ERRORS) {
            Some(value) => parse_flag(EXPOSE_INTERNAL_ERRORS, &value)?,
            None => false
        };

        let locale = match variable(LOCALE) {
            Some(value) => value.parse()
                .map_err(|_| ConfigError::InvalidVariable { name: LOCALE, value })?,
            None => Locale::default()
        };

        Ok(Self {
            input: PathBuf::from(input),
            log_level,
            expose_internal_errors,
            locale
        })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidVariable { name, value: value.to_string() })
    }
}
