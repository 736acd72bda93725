//! Configuration access port trait.

use chrono::NaiveDate;

use crate::domain::error::PnlError;
use crate::domain::schema;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// A `DD-MM-YYYY` date, `Ok(None)` when the key is absent or blank.
    fn get_date(&self, section: &str, key: &str) -> Result<Option<NaiveDate>, PnlError> {
        match self.get_string(section, key).filter(|s| !s.trim().is_empty()) {
            None => Ok(None),
            Some(raw) => schema::parse_date(&raw)
                .map(Some)
                .map_err(|_| PnlError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.to_string(),
                    reason: format!("invalid date {:?} (expected DD-MM-YYYY)", raw),
                }),
        }
    }
}
