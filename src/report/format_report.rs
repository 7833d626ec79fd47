use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{FuelGrade, PriceReading};
use crate::storage::filter_for_day::DayReadings;

pub const NO_DATA_MESSAGE: &str = "No data available for the target date.";

const CURRENCY_SYMBOL: &str = "$";

pub fn report_subject(target_date: NaiveDate) -> String {
    format!("Gas Prices for {}", target_date.format("%Y-%m-%d"))
}

/// Renders one paragraph per reading, in the given order.
///
/// A missing price keeps its label but shows no value.
pub fn format_readings(target_date: NaiveDate, readings: &[PriceReading]) -> String {
    let mut text = format!("{}:\n\n", report_subject(target_date));

    for reading in readings {
        // Writing into a String cannot fail.
        let _ = writeln!(text, "Station: {} ({})", reading.station_nickname, reading.location);
        for grade in FuelGrade::ALL {
            match reading.price(grade) {
                Some(price) => {
                    let _ = writeln!(text, "{}: {}{}", grade, CURRENCY_SYMBOL, price);
                }
                None => {
                    let _ = writeln!(text, "{}: ", grade);
                }
            }
        }
        text.push('\n');
    }

    text
}

/// Builds the report body, falling back to [`NO_DATA_MESSAGE`] when the store
/// is missing or holds nothing for the day.
pub fn render_day_report(target_date: NaiveDate, day: &DayReadings) -> String {
    match day {
        DayReadings::Readings(readings) if !readings.is_empty() => format_readings(target_date, readings),
        _ => NO_DATA_MESSAGE.to_string(),
    }
}
