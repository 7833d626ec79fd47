use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::StationConfig;

/// Fuel grades in the order the station pages list them.
///
/// Grades are assigned by position only: the first price on the page is taken
/// to be regular, the second midgrade and the third premium. A station selling
/// two grades, or more than three, ends up mislabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuelGrade {
    Regular,
    Midgrade,
    Premium,
}

impl FuelGrade {
    pub const ALL: [FuelGrade; 3] = [FuelGrade::Regular, FuelGrade::Midgrade, FuelGrade::Premium];

    pub fn label(self) -> &'static str {
        match self {
            FuelGrade::Regular => "Regular",
            FuelGrade::Midgrade => "Midgrade",
            FuelGrade::Premium => "Premium",
        }
    }
}

impl fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prices found on one station page, keyed by grade. Holds between zero and three entries.
pub type PriceMap = BTreeMap<FuelGrade, String>;

/// One row of the price history.
///
/// Field order is the column order of the CSV store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceReading {
    pub regular: Option<String>,
    pub midgrade: Option<String>,
    pub premium: Option<String>,
    pub date: NaiveDate,
    pub station_nickname: String,
    pub location: String,
}

impl PriceReading {
    pub const HEADER: [&'static str; 6] = [
        "regular",
        "midgrade",
        "premium",
        "date",
        "station_nickname",
        "location",
    ];

    pub fn new(date: NaiveDate, station: &StationConfig, mut prices: PriceMap) -> Self {
        Self {
            regular: prices.remove(&FuelGrade::Regular),
            midgrade: prices.remove(&FuelGrade::Midgrade),
            premium: prices.remove(&FuelGrade::Premium),
            date,
            station_nickname: station.nickname.clone(),
            location: station.location.clone(),
        }
    }

    pub fn price(&self, grade: FuelGrade) -> Option<&str> {
        match grade {
            FuelGrade::Regular => self.regular.as_deref(),
            FuelGrade::Midgrade => self.midgrade.as_deref(),
            FuelGrade::Premium => self.premium.as_deref(),
        }
    }

    pub fn has_prices(&self) -> bool {
        FuelGrade::ALL.iter().any(|grade| self.price(*grade).is_some())
    }
}
