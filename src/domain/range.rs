//! Inclusive date window and the range filter.

use chrono::NaiveDate;

use super::error::PnlError;
use super::record::DailyRecord;
use super::schema;

/// Inclusive `[start, end]` window. An inverted window (`start > end`) is
/// valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds as `DD-MM-YYYY`.
    pub fn parse(start: &str, end: &str) -> Result<Self, PnlError> {
        Ok(Self {
            start: parse_bound("start", start)?,
            end: parse_bound("end", end)?,
        })
    }

    /// First to last date of an ascending table, or `None` when it is empty.
    pub fn spanning(table: &[DailyRecord]) -> Option<Self> {
        let first = table.first()?;
        let last = table.last()?;
        Some(Self::new(first.date, last.date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            schema::format_date(self.start),
            schema::format_date(self.end)
        )
    }
}

pub fn parse_bound(bound: &'static str, value: &str) -> Result<NaiveDate, PnlError> {
    schema::parse_date(value).map_err(|_| PnlError::InvalidRange {
        bound,
        value: value.to_string(),
    })
}

/// Records whose date lies inside `range`, in their original order.
pub fn filter(table: &[DailyRecord], range: &DateRange) -> Vec<DailyRecord> {
    table
        .iter()
        .filter(|r| range.contains(r.date))
        .copied()
        .collect()
}
