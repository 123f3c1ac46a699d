use chrono::{Local, NaiveDate};
use reqwest::Client;

use crate::record::BalanceTable;
use crate::request::fetch_page_tables;
use crate::{info_time, Error, Result, BATCH_SIZE, DEFAULT_BASE_URL, MAX_LIMIT};

const FIRST_PAGE_PATH: &str = "top-100-richest-bitcoin-addresses.html";
const PAGE_PATH_TEMPLATE: &str = "top-100-richest-bitcoin-addresses-{page}.html";
const PAGE_PLACEHOLDER: &str = "{page}";

/// Where the ranking pages live.
///
/// Page 1 has its own URL, pages 2.. are built from a template containing `{page}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    first_url: String,
    page_url_template: String,
    max_pages: usize,
}

impl Default for Source {
    fn default() -> Self {
        Self::at(DEFAULT_BASE_URL)
    }
}

impl Source {
    pub fn new(first_url: impl Into<String>, page_url_template: impl Into<String>) -> Self {
        Self {
            first_url: first_url.into(),
            page_url_template: page_url_template.into(),
            max_pages: MAX_LIMIT as usize / BATCH_SIZE,
        }
    }

    /// Builds the site's page layout under `base_url`, e.g. `https://bitinfocharts.com/en`.
    pub fn at(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self::new(
            format!("{base_url}/{FIRST_PAGE_PATH}"),
            format!("{base_url}/{PAGE_PATH_TEMPLATE}"),
        )
    }

    /// Upper bound on the number of pages a single crawl may request.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// URL of the 1-based `page_num`.
    pub fn page_url(&self, page_num: usize) -> String {
        if page_num <= 1 {
            self.first_url.clone()
        } else {
            self.page_url_template
                .replace(PAGE_PLACEHOLDER, &page_num.to_string())
        }
    }
}

/// Crawls the richest addresses from the default site until at least `limit` ranks are covered.
///
/// Addresses come in batches of a hundred, so the result may hold more rows than `limit`.
/// `limit` must satisfy `0 < limit <= 10000`.
pub async fn crawl_richest_addresses(limit: i64) -> Result<BalanceTable> {
    crawl_richest_from(&Client::new(), &Source::default(), limit).await
}

/// Same as [`crawl_richest_addresses`] against an arbitrary [`Source`].
///
/// The crawl succeeds as soon as the highest rank seen reaches `limit`. It fails with
/// [`Error::Exhausted`] if a page brings no higher rank (missing or empty table)
/// or if `source.max_pages()` pages were requested without reaching `limit`.
pub async fn crawl_richest_from(client: &Client, source: &Source, limit: i64) -> Result<BalanceTable> {
    let limit = validate_limit(limit)?;
    let start_time = Local::now();
    // Every record of a single run carries the same date.
    let crawled: NaiveDate = start_time.date_naive();

    info_time!("Crawling {limit} richest bitcoin addresses");

    let mut balances = BalanceTable::with_capacity(limit as usize);
    let mut max_rank = 0;
    let mut pages = 0;

    while pages < source.max_pages() {
        pages += 1;
        let url = source.page_url(pages);

        let page = fetch_page_tables(client, &url, crawled).await?;
        let page_max = page.as_ref().and_then(BalanceTable::max_rank);
        let (Some(page), Some(page_max)) = (page, page_max) else {
            info_time!("No ranking table on page {pages}");
            return Err(Error::Exhausted { pages, max_rank, limit });
        };
        if page_max <= max_rank {
            info_time!("Page {pages} didn't advance past rank {max_rank}");
            return Err(Error::Exhausted { pages, max_rank, limit });
        }

        info_time!("Page {pages}: {} rows, up to rank {page_max}", page.len());
        max_rank = page_max;
        balances.append(page);

        if max_rank >= limit {
            info_time!(
                start_time,
                "Crawled {} addresses in {pages} page(s)",
                balances.len()
            );
            return Ok(balances);
        }
    }

    Err(Error::Exhausted { pages, max_rank, limit })
}

/// Checks `0 < limit <= MAX_LIMIT`.
pub fn validate_limit(limit: i64) -> Result<u64> {
    match u64::try_from(limit) {
        Ok(n) if n > 0 && n <= MAX_LIMIT => Ok(n),
        _ => Err(Error::InvalidLimit {
            limit,
            max: MAX_LIMIT,
        }),
    }
}
