mod app_config;

pub use app_config::{
    init_app_config, AppConfig, ConfigError, DEBUG_VAR, LOG_FILE_VAR, LOG_LEVEL_VAR, TITLE_VAR,
};
