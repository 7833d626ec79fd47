use anyhow::{bail, Context, Result};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::notify::main::{SendReport, SmtpMailer};

impl SmtpMailer {
    /// Builds the plain-text message addressed to every recipient.
    pub(crate) fn build_message(&self, subject: &str, body: &str, recipients: &[String]) -> Result<Message> {
        if recipients.is_empty() {
            bail!("No recipients configured for the report");
        }

        let from: Mailbox = self
            .from
            .parse()
            .with_context(|| format!("Invalid sender address: {}", self.from))?;

        let mut builder = Message::builder().from(from).subject(subject).header(ContentType::TEXT_PLAIN);

        for recipient in recipients {
            let to: Mailbox = recipient
                .parse()
                .with_context(|| format!("Invalid recipient address: {}", recipient))?;
            builder = builder.to(to);
        }

        builder.body(body.to_string()).context("Failed to build email message")
    }
}

impl SendReport for SmtpMailer {
    async fn send_report(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        let Some(password) = self.password() else {
            bail!("SMTP password is not set; provide it with APP_SMTP__PASSWORD");
        };

        let message = self.build_message(subject, body, recipients)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.server)
            .with_context(|| format!("Failed to set up SMTP relay {}", self.server))?
            .port(self.port)
            .credentials(Credentials::new(self.username.clone(), password.to_string()))
            .build();

        transport
            .send(message)
            .await
            .with_context(|| format!("Failed to send email through {}:{}", self.server, self.port))?;

        Ok(())
    }
}
