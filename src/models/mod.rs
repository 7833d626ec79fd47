pub mod price_reading;

pub use price_reading::{FuelGrade, PriceMap, PriceReading};
