pub mod append_readings;
pub mod filter_for_day;
