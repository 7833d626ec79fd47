pub mod console_send_report;
pub mod main;
pub mod smtp_send_report;

pub use main::{ConsoleMailer, SendReport, SmtpMailer};
