use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::record::{BalanceRecord, BalanceTable};
use crate::{Error, Result, BATCH_SIZE};

/// Id of the first ranking table on a page. Further tables are suffixed `2`, `3`, ...
const BASE_TABLE_ID: &str = "tblOne";
/// Unit marker that terminates the amount in a balance cell.
const BALANCE_UNIT: &str = "BTC";

/// Lazily produces the candidate table ids: `tblOne`, `tblOne2`, `tblOne3`, ...
pub fn table_ids() -> impl Iterator<Item = String> {
    std::iter::once(BASE_TABLE_ID.to_string())
        .chain((2usize..).map(|n| format!("{BASE_TABLE_ID}{n}")))
}

/// Parses the page on the blocking pool, since `Html` is not `Send` and parsing is CPU bound.
pub(crate) async fn parse_html(html: String, crawled: NaiveDate) -> Result<Option<BalanceTable>> {
    spawn_blocking(move || parse_page(&html, crawled)).await?
}

/// Extracts all the ranking tables of a page and concatenates them in discovery order.
///
/// Tables are probed by id (see [`table_ids`]) until the first missing one.
/// Returns `Ok(None)` if the page doesn't contain the base table at all.
pub fn parse_page(html: &str, crawled: NaiveDate) -> Result<Option<BalanceTable>> {
    let doc = Html::parse_document(html);

    let body_selector = create_selector("tbody")?;
    let row_selector = create_selector("tr")?;
    let cell_selector = create_selector("td")?;

    let mut page_table: Option<BalanceTable> = None;
    for table_id in table_ids() {
        let table_selector = create_selector(&format!(r#"table[id="{table_id}"]"#))?;
        let Some(table) = doc.select(&table_selector).next() else {
            break;
        };

        // Tables without a body hold their rows directly.
        let body = table.select(&body_selector).next().unwrap_or(table);

        let parsed = page_table.get_or_insert_with(|| BalanceTable::with_capacity(BATCH_SIZE));
        for row in body.select(&row_selector) {
            if let Some(record) = parse_row(row, &cell_selector, crawled)? {
                parsed.push(record);
            }
        }
    }

    Ok(page_table)
}

/// Rows without any `<td>` are headers and yield `None`.
fn parse_row(
    row: ElementRef,
    cell_selector: &Selector,
    crawled: NaiveDate,
) -> Result<Option<BalanceRecord>> {
    let cells: Vec<String> = row.select(cell_selector).map(cell_text).collect();
    if cells.is_empty() {
        return Ok(None);
    }

    let [rank, address, balance, ..] = cells.as_slice() else {
        return Err(Error::ParseRowCells { found: cells.len() });
    };

    Ok(Some(BalanceRecord {
        rank: parse_rank(rank)?,
        address: address.clone(),
        balance: parse_balance(balance)?,
        crawled,
    }))
}

#[inline]
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Parses a balance like `"1,234.50 BTC ($63,012,345)"` into `1234.5`.
pub fn parse_balance(balance: &str) -> Result<f64> {
    let invalid = || Error::ParseBalance(balance.to_string());

    let (amount, _) = balance.split_once(BALANCE_UNIT).ok_or_else(invalid)?;
    let value: f64 = amount
        .replace(',', "")
        .trim()
        .parse()
        .map_err(|_| invalid())?;

    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

pub fn parse_rank(rank: &str) -> Result<u64> {
    match rank.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::ParseRank(rank.to_string())),
    }
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
