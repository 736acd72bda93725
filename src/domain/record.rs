//! Daily profit/loss record.

use chrono::NaiveDate;

/// One trading day of realized profit or loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub profit: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, profit: f64) -> Self {
        Self { date, profit }
    }

    pub fn is_win(&self) -> bool {
        self.profit > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}
