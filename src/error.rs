use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Limit must satisfy 0 < limit <= {max}, got {limit}")]
    InvalidLimit { limit: i64, max: u64 },

    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),
    #[error("Couldn't parse a rank from {0:?}")]
    ParseRank(String),
    #[error("Couldn't parse a balance from {0:?}")]
    ParseBalance(String),
    #[error("Table row has {found} cells, expected at least 3")]
    ParseRowCells { found: usize },

    #[error("Source exhausted after {pages} page(s): highest rank {max_rank}, limit {limit}")]
    Exhausted { pages: usize, max_rank: u64, limit: u64 },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
