//! Crawls the richest bitcoin addresses and their balances from bitinfocharts.
//! Pages are fetched one after another until the requested rank is covered.

mod config;
mod error;
mod macros;
mod parse;
pub mod process;
mod record;
mod request;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use parse::{parse_balance, parse_page, parse_rank, table_ids};
pub use process::{crawl_richest_addresses, crawl_richest_from, Source};
pub use record::{BalanceRecord, BalanceTable};
pub use request::fetch_page_tables;

/// Rows contributed by one page.
pub const BATCH_SIZE: usize = 100;
/// Highest rank the site lists.
pub const MAX_LIMIT: u64 = 10_000;
pub const DEFAULT_LIMIT: i64 = 10_000;
pub const DEFAULT_BASE_URL: &str = "https://bitinfocharts.com/en";
pub const DEFAULT_FILE_PATH: &str = "data/bitcoin_balances_ddmmYYYY.csv";
