pub mod config;

pub use self::config::{
    load_config, AppConfig, ScrapingConfig, SmtpConfig, StationConfig, DEFAULT_SETTINGS_FILE,
};
