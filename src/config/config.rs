use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "Settings.toml";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const DEFAULT_PRICE_DISPLAY_SELECTOR: &str = "div.GasPriceCollection-module__priceDisplay___1pnaL";
const DEFAULT_PRICE_SELECTOR: &str = "span.FuelTypePriceDisplay-module__price___3iizb";

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub base: BaseConfig,
    #[serde(default)]
    pub file: FileConfig,
    #[serde(default)]
    pub scraping: ScrapingConfig,
    #[serde(default)]
    pub stations: Vec<StationConfig>,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct FileConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { data_file: default_data_file() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScrapingConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_price_display_selector")]
    pub price_display_selector: String,
    #[serde(default = "default_price_selector")]
    pub price_selector: String,
    #[serde(default)]
    pub min_delay_ms: u64,
    #[serde(default)]
    pub max_delay_ms: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            price_display_selector: default_price_display_selector(),
            price_selector: default_price_selector(),
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }
}

/// One monitored station: where its page lives and how it shows up in the report.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    pub url: String,
    pub nickname: String,
    pub location: String,
}

#[derive(Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_server")]
    pub server: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    /// Only ever supplied through the environment (`APP_SMTP__PASSWORD`).
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

impl SmtpConfig {
    pub fn sender(&self) -> &str {
        self.from.as_deref().unwrap_or(&self.username)
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            server: default_smtp_server(),
            port: default_smtp_port(),
            username: String::new(),
            password: None,
            from: None,
        }
    }
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("from", &self.from)
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub recipients: Vec<String>,
}

fn default_data_file() -> String {
    "gas_prices.csv".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_price_display_selector() -> String {
    DEFAULT_PRICE_DISPLAY_SELECTOR.to_string()
}

fn default_price_selector() -> String {
    DEFAULT_PRICE_SELECTOR.to_string()
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Loads the settings file and overlays `APP_*` environment variables on top of it.
///
/// Nested keys use a double underscore, e.g. `APP_SMTP__PASSWORD` or `APP_FILE__DATA_FILE`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(path).format(config::FileFormat::Toml))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("report.recipients")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
