//! Trade log access port trait.

use chrono::NaiveDate;

use crate::domain::error::PnlError;
use crate::domain::record::DailyRecord;

pub trait TradeLogPort {
    /// Every record of the log, ascending by date.
    fn load(&self) -> Result<Vec<DailyRecord>, PnlError>;

    /// First date, last date and record count, or `None` for an empty log.
    fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, PnlError> {
        let records = self.load()?;
        Ok(match (records.first(), records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date, records.len())),
            _ => None,
        })
    }
}
