use clap::Parser;
use tracing::Level;

use crate::{DEFAULT_BASE_URL, DEFAULT_FILE_PATH, DEFAULT_LIMIT};

/// Crawls the richest bitcoin addresses and their balances into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "richlist", version, about)]
pub struct Config {
    /// Limit of crawled bitcoin addresses
    #[arg(short, long, env = "RICHLIST_LIMIT", default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Path of the destination file, `ddmmYYYY` is replaced with the current date
    #[arg(short, long, env = "RICHLIST_FILE", default_value = DEFAULT_FILE_PATH)]
    pub file: String,

    /// Site that serves the ranking pages
    #[arg(long, env = "RICHLIST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "RICHLIST_LOG_LEVEL", default_value = "INFO")]
    pub log_level: Level,
}
