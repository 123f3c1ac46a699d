use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tokio::fs;

use crate::record::BalanceTable;
use crate::{info_time, Error, Result};

/// Placeholder in the destination template that is replaced with the run date.
pub const DATE_PLACEHOLDER: &str = "ddmmYYYY";

/// Replaces [`DATE_PLACEHOLDER`] in `template` with `date` formatted as `%d%m%Y`.
pub fn destination_path(template: &str, date: NaiveDate) -> PathBuf {
    let stamp = date.format("%d%m%Y").to_string();
    PathBuf::from(template.replace(DATE_PLACEHOLDER, &stamp))
}

/// Serializes the table into CSV with a `rank,address,balance,crawled` header.
pub fn to_csv_bytes(table: &BalanceTable) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::with_capacity(table.len() * 64));
    for record in table {
        wtr.serialize(record)?;
    }
    // An empty table still gets its header.
    if table.is_empty() {
        wtr.write_record(["rank", "address", "balance", "crawled"])?;
    }
    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Writes the whole table to `path` in one go, creating missing parent directories.
pub async fn store_table(table: &BalanceTable, path: &Path) -> Result<()> {
    let local_now = Local::now();
    let bytes = to_csv_bytes(table)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, bytes).await?;
    info_time!(local_now, "Wrote {} rows to file: {}", table.len(), path.display());

    Ok(())
}
