use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use reqwest::Client;
use tracing::info;

use crate::config::AppConfig;
use crate::models::PriceReading;
use crate::notify::SendReport;
use crate::report::format_report::{render_day_report, report_subject, NO_DATA_MESSAGE};
use crate::scraping::get_gas_prices::get_gas_prices;
use crate::scraping::price_selectors::PriceSelectors;
use crate::storage::append_readings::{append_readings, AppendOutcome};
use crate::storage::filter_for_day::{filter_for_day, DayReadings};
use crate::utilities::generate_random_delay::generate_random_delay;

/// What a report step found and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReport {
    pub subject: String,
    pub body: String,
    pub day: DayReadings,
}

/// What a full run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub readings: Vec<PriceReading>,
    pub store: AppendOutcome,
    pub report: SentReport,
}

/// Polls every configured station, one after the other, and builds a reading
/// for each. Stations that could not be read still get a reading, without prices.
pub async fn collect_readings(client: &Client, config: &AppConfig, date: NaiveDate) -> Result<Vec<PriceReading>> {
    let selectors = PriceSelectors::from_config(&config.scraping)?;
    let mut readings = Vec::with_capacity(config.stations.len());

    for (index, station) in config.stations.iter().enumerate() {
        if index > 0 {
            generate_random_delay(config.scraping.min_delay_ms, config.scraping.max_delay_ms).await;
        }

        let prices = get_gas_prices(client, station, &config.scraping, &selectors).await;
        readings.push(PriceReading::new(date, station, prices));
    }

    let with_prices = readings.iter().filter(|r| r.has_prices()).count();
    info!(stations = readings.len(), with_prices, "Collected readings");

    Ok(readings)
}

/// Collects today's readings and appends them to the store.
pub async fn fetch_and_store(client: &Client, config: &AppConfig, date: NaiveDate) -> Result<(Vec<PriceReading>, AppendOutcome)> {
    let readings = collect_readings(client, config, date).await?;
    let path = Path::new(&config.file.data_file);

    let outcome = append_readings(path, &readings).await?;
    match outcome {
        AppendOutcome::Created => println!("{}", format!("Creating {} file", path.display()).green()),
        AppendOutcome::Appended => println!("{}", format!("Gas prices have been appended to {}", path.display()).green()),
        AppendOutcome::Skipped => println!("{}", "No stations configured, nothing to store".yellow()),
    }

    Ok((readings, outcome))
}

/// Filters the store for `date`, renders the report and hands it to `notifier`.
///
/// A missing store or an empty day still produces a report carrying the
/// "no data" message.
pub async fn send_day_report<N: SendReport>(config: &AppConfig, notifier: &N, date: NaiveDate) -> Result<SentReport> {
    let path = Path::new(&config.file.data_file);
    let day = filter_for_day(path, date).await?;

    match &day {
        DayReadings::NoDataFile => println!("{}", format!("No data file found at {}", path.display()).red()),
        DayReadings::Readings(readings) if readings.is_empty() => {
            println!("{}", NO_DATA_MESSAGE.yellow())
        }
        DayReadings::Readings(readings) => info!(rows = readings.len(), %date, "Filtered data for the target date"),
    }

    let subject = report_subject(date);
    let body = render_day_report(date, &day);

    notifier
        .send_report(&subject, &body, &config.report.recipients)
        .await
        .context("Failed to send the report")?;
    println!("{}", "Report sent successfully".green());

    Ok(SentReport { subject, body, day })
}

/// Full pipeline: fetch, store, filter, format, send.
pub async fn run_daily_report<N: SendReport>(client: &Client, config: &AppConfig, notifier: &N, date: NaiveDate) -> Result<RunSummary> {
    let (readings, store) = fetch_and_store(client, config, date).await?;
    let report = send_day_report(config, notifier, date).await?;

    Ok(RunSummary { readings, store, report })
}
