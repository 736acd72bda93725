//! CSV trade log adapter.

use crate::domain::error::PnlError;
use crate::domain::record::DailyRecord;
use crate::domain::schema;
use crate::ports::trade_log_port::TradeLogPort;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvTradeLogAdapter {
    path: PathBuf,
}

impl CsvTradeLogAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse CSV text with a header containing `Date` and `Profit`.
    /// Other columns are ignored. Records come back stable-sorted by date.
    pub fn parse(content: &str) -> Result<Vec<DailyRecord>, PnlError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = rdr.headers().map_err(|e| PnlError::Ingest {
            reason: format!("CSV header error: {}", e),
        })?;
        let date_idx = column_index(headers, schema::DATE_COLUMN)?;
        let profit_idx = column_index(headers, schema::PROFIT_COLUMN)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row_no = i + 1;
            let record = result.map_err(|e| PnlError::Ingest {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(date_idx).ok_or_else(|| PnlError::Ingest {
                reason: format!("row {}: missing date column", row_no),
            })?;
            let date = schema::parse_date(date_str).map_err(|e| PnlError::Ingest {
                reason: format!("row {}: invalid date {:?}: {}", row_no, date_str, e),
            })?;

            let profit: f64 = record
                .get(profit_idx)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| PnlError::Ingest {
                    reason: format!("row {}: missing profit value", row_no),
                })?
                .parse()
                .map_err(|e| PnlError::Ingest {
                    reason: format!("row {}: invalid profit value: {}", row_no, e),
                })?;
            if !profit.is_finite() {
                return Err(PnlError::Ingest {
                    reason: format!("row {}: non-finite profit value", row_no),
                });
            }

            records.push(DailyRecord { date, profit });
        }

        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, PnlError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PnlError::Ingest {
            reason: format!("missing {} column", name),
        })
}

impl TradeLogPort for CsvTradeLogAdapter {
    fn load(&self) -> Result<Vec<DailyRecord>, PnlError> {
        let content = fs::read_to_string(&self.path).map_err(|e| PnlError::Ingest {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let records = Self::parse(&content)?;
        debug!(path = %self.path.display(), records = records.len(), "loaded trade log");
        Ok(records)
    }
}
