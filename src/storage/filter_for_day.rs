use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use serde::Deserialize;
use tokio::fs::{self, File};
use tracing::warn;

use crate::models::PriceReading;

/// Readings found for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayReadings {
    /// The store does not exist yet.
    NoDataFile,
    /// Rows dated on the target day, in store order. May be empty.
    Readings(Vec<PriceReading>),
}

impl DayReadings {
    pub fn readings(&self) -> &[PriceReading] {
        match self {
            DayReadings::NoDataFile => &[],
            DayReadings::Readings(readings) => readings.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.readings().is_empty()
    }
}

// Columns are matched by header name; the date is kept as text until parsed.
#[derive(Deserialize)]
struct StoredRow {
    #[serde(default)]
    regular: Option<String>,
    #[serde(default)]
    midgrade: Option<String>,
    #[serde(default)]
    premium: Option<String>,
    date: String,
    station_nickname: String,
    location: String,
}

/// Loads the store and keeps the rows dated exactly on `target_date`.
///
/// # Errors
///
/// Returns an error if the store exists but cannot be opened or read. Rows
/// with the wrong number of fields or an unparseable date are skipped.
pub async fn filter_for_day(path: &Path, target_date: NaiveDate) -> Result<DayReadings> {
    let exists = fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;

    if !exists {
        return Ok(DayReadings::NoDataFile);
    }

    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut deserializer = AsyncReaderBuilder::new().create_deserializer(file);
    let mut rows = deserializer.deserialize::<StoredRow>();

    let mut readings = Vec::new();
    let mut line = 1;

    while let Some(row) = rows.next().await {
        line += 1;
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => {
                return Err(e).with_context(|| format!("Failed to read row {} of {}", line, path.display()));
            }
            Err(e) => {
                warn!(line, "Skipping malformed row: {:#}", e);
                continue;
            }
        };

        let Some(date) = parse_date(&row.date) else {
            warn!(line, date = %row.date, "Skipping row with unparseable date");
            continue;
        };

        if date == target_date {
            readings.push(PriceReading {
                regular: row.regular,
                midgrade: row.midgrade,
                premium: row.premium,
                date,
                station_nickname: row.station_nickname,
                location: row.location,
            });
        }
    }

    Ok(DayReadings::Readings(readings))
}

/// Accepts a plain date or a timestamp, in which case only its date part counts.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .ok()
}
