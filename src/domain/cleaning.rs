//! Raw backtest export cleaning.
//!
//! A raw export carries more columns than the analyzer needs and dates in
//! whatever format the exporting tool used. Cleaning keeps
//! [`schema::CLEANED_COLUMNS`] and rewrites every date into the schema format.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::PnlError;
use super::schema;

/// Banner lines above the header in a raw export.
pub const DEFAULT_SKIP_ROWS: usize = 1;
/// Zero-based column holding the trading date.
pub const DEFAULT_DATE_COLUMN: usize = 1;

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d-%m-%Y %H:%M"];

/// Parse a date written in any of the formats seen in raw exports.
/// Slash-separated dates are read day first.
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRow {
    pub date: NaiveDate,
    pub values: Vec<String>,
}

/// Cleaned export: the date column followed by `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedTable {
    pub columns: Vec<String>,
    pub rows: Vec<CleanedRow>,
}

impl CleanedTable {
    /// Header line as written to disk, date column first.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(schema::DATE_COLUMN)
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }
}

/// Select the kept columns and normalize the date column of a raw export.
pub fn clean<I>(header: &[String], rows: I, date_column: usize) -> Result<CleanedTable, PnlError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if date_column >= header.len() {
        return Err(PnlError::Ingest {
            reason: format!(
                "date column {} out of range (header has {} columns)",
                date_column,
                header.len()
            ),
        });
    }

    let indices = schema::CLEANED_COLUMNS
        .iter()
        .map(|name| {
            header
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| PnlError::Ingest {
                    reason: format!("missing column {:?}", name),
                })
        })
        .collect::<Result<Vec<usize>, PnlError>>()?;

    let mut cleaned = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        let row_no = i + 1;
        let raw_date = row.get(date_column).ok_or_else(|| PnlError::Ingest {
            reason: format!("row {}: missing date", row_no),
        })?;
        let date = normalize_date(raw_date).ok_or_else(|| PnlError::Ingest {
            reason: format!("row {}: unrecognised date {:?}", row_no, raw_date),
        })?;
        let values = indices
            .iter()
            .map(|&idx| row.get(idx).map(|v| v.trim().to_string()).unwrap_or_default())
            .collect();
        cleaned.push(CleanedRow { date, values });
    }

    Ok(CleanedTable {
        columns: schema::CLEANED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: cleaned,
    })
}
