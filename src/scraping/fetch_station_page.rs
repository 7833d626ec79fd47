use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// What a station URL gave back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationPage {
    /// The site refused the request (HTTP 403). The body is not read.
    Forbidden,
    /// Page body, whatever the status was.
    Body(String),
}

/// Fetches a station page with a browser-like user agent.
///
/// Without the user agent the site answers with an empty or forbidden page.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body cannot be read.
/// A 403 answer is not an error but [`StationPage::Forbidden`].
pub async fn fetch_station_page(client: &Client, url: &str, user_agent: &str) -> Result<StationPage> {
    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    let status = response.status();

    if status == StatusCode::FORBIDDEN {
        return Ok(StationPage::Forbidden);
    }

    if !status.is_success() {
        warn!(%status, url, "Unexpected status, parsing the body anyway");
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    debug!(%status, url, bytes = body.len(), "Fetched station page");

    Ok(StationPage::Body(body))
}
