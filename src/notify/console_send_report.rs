use anyhow::Result;
use colored::Colorize;

use crate::notify::main::{ConsoleMailer, SendReport};

impl SendReport for ConsoleMailer {
    async fn send_report(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        println!("{}", format!("Dry run, not sending to: {}", recipients.join(", ")).yellow());
        println!("Subject: {}", subject);
        println!();
        println!("{}", body);
        Ok(())
    }
}
