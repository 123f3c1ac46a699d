use chrono::NaiveDate;
use reqwest::Client;

use crate::parse::parse_html;
use crate::record::BalanceTable;
use crate::{info_time, Result};

/// Fetches a single page and parses all of its ranking tables.
/// Returns `Ok(None)` if the page doesn't contain a ranking table.
pub async fn fetch_page_tables(
    client: &Client,
    url: &str,
    crawled: NaiveDate,
) -> Result<Option<BalanceTable>> {
    info_time!("Crawling site {url}");
    let html = request_page_html(client, url).await?;
    parse_html(html, crawled).await
}

/// Requests a page and returns a `Result<String>` containing the HTML.
/// Non-success statuses are reported as errors.
async fn request_page_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?.error_for_status()?;
    let html = res.text().await?;
    Ok(html)
}
