use chrono::NaiveDate;
use serde::Serialize;

/// A single row of the richest-addresses list.
/// Field order is the column order of the written CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRecord {
    pub rank: u64,
    pub address: String,
    pub balance: f64,
    pub crawled: NaiveDate,
}

/// Append-only list of records in crawl order.
/// The position of a record is its index in the list, `rank` is never renumbered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceTable {
    records: Vec<BalanceRecord>,
}

impl BalanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: BalanceRecord) {
        self.records.push(record);
    }

    /// Moves all the records of `other` to the end of this table.
    pub fn append(&mut self, other: BalanceTable) {
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest rank in the table, `None` if it is empty.
    pub fn max_rank(&self) -> Option<u64> {
        self.records.iter().map(|r| r.rank).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BalanceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[BalanceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<BalanceRecord> {
        self.records
    }
}

impl IntoIterator for BalanceTable {
    type Item = BalanceRecord;
    type IntoIter = std::vec::IntoIter<BalanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a BalanceTable {
    type Item = &'a BalanceRecord;
    type IntoIter = std::slice::Iter<'a, BalanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
