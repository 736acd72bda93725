#![allow(dead_code)]

use chrono::NaiveDate;
use pnlscope::domain::error::PnlError;
pub use pnlscope::domain::record::DailyRecord;
use pnlscope::ports::trade_log_port::TradeLogPort;
use std::cell::Cell;

pub struct MockTradeLogPort {
    pub records: Vec<DailyRecord>,
    pub error: Option<String>,
    pub loads: Cell<usize>,
}

impl MockTradeLogPort {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self {
            records,
            error: None,
            loads: Cell::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            records: Vec::new(),
            error: Some(reason.to_string()),
            loads: Cell::new(0),
        }
    }
}

impl TradeLogPort for MockTradeLogPort {
    fn load(&self) -> Result<Vec<DailyRecord>, PnlError> {
        self.loads.set(self.loads.get() + 1);
        if let Some(reason) = &self.error {
            return Err(PnlError::Ingest {
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `date` in DD-MM-YYYY.
pub fn make_record(date: &str, profit: f64) -> DailyRecord {
    DailyRecord {
        date: NaiveDate::parse_from_str(date, "%d-%m-%Y").unwrap(),
        profit,
    }
}

/// One record per calendar day starting at `start` (DD-MM-YYYY).
pub fn generate_records(start: &str, profits: &[f64]) -> Vec<DailyRecord> {
    let start = NaiveDate::parse_from_str(start, "%d-%m-%Y").unwrap();
    profits
        .iter()
        .enumerate()
        .map(|(i, &profit)| DailyRecord {
            date: start + chrono::Duration::days(i as i64),
            profit,
        })
        .collect()
}

/// The four-day log used throughout the worked examples.
pub fn worked_example() -> Vec<DailyRecord> {
    vec![
        make_record("01-01-2024", 100.0),
        make_record("02-01-2024", -50.0),
        make_record("03-01-2024", 30.0),
        make_record("04-01-2024", -80.0),
    ]
}
