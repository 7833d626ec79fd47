use anyhow::{anyhow, Result};
use scraper::Selector;

use crate::config::ScrapingConfig;

/// Compiled CSS selectors used to find prices on a station page.
#[derive(Debug, Clone)]
pub struct PriceSelectors {
    /// Container of one fuel grade's current price.
    pub price_display: Selector,
    /// Price text inside a container.
    pub price: Selector,
}

impl PriceSelectors {
    pub fn new(price_display: &str, price: &str) -> Result<Self> {
        Ok(Self {
            price_display: parse_selector(price_display)?,
            price: parse_selector(price)?,
        })
    }

    pub fn from_config(config: &ScrapingConfig) -> Result<Self> {
        Self::new(&config.price_display_selector, &config.price_selector)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid CSS selector '{}': {:?}", selector, e))
}
