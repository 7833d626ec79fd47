use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use reqwest::Client;

use gas_price_report::cli::{Args, Command, ReportArgs};
use gas_price_report::config::{load_config, AppConfig};
use gas_price_report::logging::init_logging;
use gas_price_report::notify::{ConsoleMailer, SmtpMailer};
use gas_price_report::pipeline::run_daily_report::{fetch_and_store, run_daily_report, send_day_report};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load configuration settings
    let config = match load_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration from {}: {}", args.config.display(), e).red());
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    let client = Client::new();
    let today = Local::now().date_naive();

    match args.command.unwrap_or_else(|| Command::Run(ReportArgs::default())) {
        Command::Run(report) => {
            let date = report.date.unwrap_or(today);
            if report.dry_run {
                run_daily_report(&client, &config, &ConsoleMailer, date).await?;
            } else {
                run_daily_report(&client, &config, &SmtpMailer::from_config(&config.smtp), date).await?;
            }
        }
        Command::Fetch => {
            let (readings, _) = fetch_and_store(&client, &config, today).await?;
            for reading in &readings {
                println!(
                    "{} ({}): regular={} midgrade={} premium={}",
                    reading.station_nickname,
                    reading.location,
                    reading.regular.as_deref().unwrap_or("-"),
                    reading.midgrade.as_deref().unwrap_or("-"),
                    reading.premium.as_deref().unwrap_or("-"),
                );
            }
        }
        Command::Report(report) => {
            send_report(&config, report.date.unwrap_or(today), report.dry_run).await?;
        }
    }

    Ok(())
}

async fn send_report(config: &AppConfig, date: NaiveDate, dry_run: bool) -> Result<()> {
    if dry_run {
        send_day_report(config, &ConsoleMailer, date).await?;
    } else {
        send_day_report(config, &SmtpMailer::from_config(&config.smtp), date)
            .await
            .with_context(|| format!("Failed to report on {}", date))?;
    }
    Ok(())
}
