//! Outbound fetch for the source page.

use tracing::info;

use crate::errors::AppError;

/// Fetch the raw markup of the source page.
///
/// One GET through the shared client. A transport failure or non-2xx status
/// surfaces as a fetch error for the caller to report as a failed scrape; no
/// retry is attempted.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), %url, "Fetched source page");
    Ok(body)
}
