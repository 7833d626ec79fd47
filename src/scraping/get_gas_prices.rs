use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::{ScrapingConfig, StationConfig};
use crate::models::PriceMap;
use crate::scraping::extract_prices::extract_prices;
use crate::scraping::fetch_station_page::{fetch_station_page, StationPage};
use crate::scraping::price_selectors::PriceSelectors;

/// Fetches one station and extracts its prices.
///
/// Never fails: a forbidden page, a transport error or an unparseable page all
/// end up as an empty (or partial) map so that the rest of the run goes on.
#[instrument(skip_all, fields(station = %station.nickname))]
pub async fn get_gas_prices(
    client: &Client,
    station: &StationConfig,
    scraping: &ScrapingConfig,
    selectors: &PriceSelectors,
) -> PriceMap {
    match fetch_station_page(client, &station.url, &scraping.user_agent).await {
        Ok(StationPage::Forbidden) => {
            warn!(url = %station.url, "Access forbidden");
            PriceMap::new()
        }
        Ok(StationPage::Body(body)) => {
            let prices = extract_prices(&body, selectors);
            info!(found = prices.len(), "Extracted prices");
            prices
        }
        Err(e) => {
            warn!(url = %station.url, "Failed to fetch station page: {:#}", e);
            PriceMap::new()
        }
    }
}
