use scraper::{ElementRef, Html};
use tracing::warn;

use crate::models::{FuelGrade, PriceMap};
use crate::scraping::price_selectors::PriceSelectors;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

/// Extracts the current fuel prices from a station page.
///
/// The page also carries historical prices, so only elements matching the
/// price-display selector are considered. The first three found are mapped to
/// regular, midgrade and premium by position, whatever the page calls them.
///
/// # Arguments
/// * `html_content` - Raw HTML of the station page.
/// * `selectors` - Selectors for the price containers and the price text inside them.
///
/// # Returns
/// A map with up to three grades. It is empty when fewer than three containers
/// are found, and partial when a container has no price text: grades before the
/// broken container are kept, later ones are dropped.
pub fn extract_prices(html_content: &str, selectors: &PriceSelectors) -> PriceMap {
    let document = Html::parse_document(html_content);
    let displays: Vec<ElementRef> = document.select(&selectors.price_display).collect();

    let mut prices = PriceMap::new();

    if displays.len() < FuelGrade::ALL.len() {
        warn!(found = displays.len(), "Fewer than three price displays found");
        return prices;
    }

    for (grade, display) in FuelGrade::ALL.into_iter().zip(displays) {
        match display.select(&selectors.price).next() {
            Some(price) => {
                let text = price.text().collect::<String>();
                prices.insert(grade, clean_price(&text));
            }
            None => {
                warn!(%grade, "Price display without a price element");
                break;
            }
        }
    }

    prices
}

/// Trims whitespace and a leading currency symbol.
fn clean_price(text: &str) -> String {
    text.trim()
        .trim_start_matches(CURRENCY_SYMBOLS)
        .trim()
        .to_string()
}
