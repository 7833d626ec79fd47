use anyhow::Result;

use crate::config::SmtpConfig;

/// SMTP connection details. The password is resolved from the configuration
/// at construction time and only used when a message goes out.
pub struct SmtpMailer {
    pub(crate) server: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    password: Option<String>,
    pub(crate) from: String,
}

impl SmtpMailer {
    pub fn new(server: String, port: u16, username: String, password: Option<String>, from: String) -> Self {
        SmtpMailer {
            server,
            port,
            username,
            password,
            from,
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Self {
        Self::new(
            config.server.clone(),
            config.port,
            config.username.clone(),
            config.password.clone(),
            config.sender().to_string(),
        )
    }

    pub(crate) fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Prints the report instead of sending it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

pub trait SendReport {
    async fn send_report(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()>;
}
