pub mod extract_prices;
pub mod fetch_station_page;
pub mod get_gas_prices;
pub mod price_selectors;
