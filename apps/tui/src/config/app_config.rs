use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const TITLE_VAR: &str = "ITEM_LIST_TITLE";
pub const LOG_LEVEL_VAR: &str = "ITEM_LIST_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "ITEM_LIST_LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

const DEFAULT_TITLE: &str = "Item List";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level {value:?} in {var}")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Runtime settings gathered from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: LevelFilter::INFO,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = lookup(TITLE_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        // DEBUG=1 only raises the default; an explicit level still wins
        let debug = lookup(DEBUG_VAR).is_some_and(|value| value == "1");
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value,
                })?,
            None if debug => LevelFilter::DEBUG,
            None => LevelFilter::INFO,
        };

        let log_file = lookup(LOG_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            title,
            log_level,
            log_file,
        })
    }
}

/// Initializes the application configuration
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig::from_lookup(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_reads_all_variables() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup_from(&[
            (TITLE_VAR, "Groceries"),
            (LOG_LEVEL_VAR, "warn"),
            (LOG_FILE_VAR, "/tmp/items.log"),
        ]))?;

        assert_eq!(config.title, "Groceries");
        assert_eq!(config.log_level, LevelFilter::WARN);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/items.log")));
        Ok(())
    }

    #[test]
    fn test_debug_flag_raises_default_level_only() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup_from(&[(DEBUG_VAR, "1")]))?;
        assert_eq!(config.log_level, LevelFilter::DEBUG);

        let config =
            AppConfig::from_lookup(lookup_from(&[(DEBUG_VAR, "1"), (LOG_LEVEL_VAR, "error")]))?;
        assert_eq!(config.log_level, LevelFilter::ERROR);
        Ok(())
    }

    #[test]
    fn test_blank_title_falls_back_to_default() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup_from(&[(TITLE_VAR, "   ")]))?;
        assert_eq!(config.title, "Item List");
        Ok(())
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidLogLevel {
                var: LOG_LEVEL_VAR,
                value: "loud".to_string(),
            })
        );
    }
}
