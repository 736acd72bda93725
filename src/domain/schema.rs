//! Trade log column and date contract.
//!
//! The cleaner writes files in this shape and the loader reads them back, so
//! both sides go through [`parse_date`] and [`format_date`] instead of carrying
//! their own format strings.

use chrono::NaiveDate;

pub const DATE_COLUMN: &str = "Date";
pub const PROFIT_COLUMN: &str = "Profit";

/// Columns kept from a raw backtest export, in output order.
pub const CLEANED_COLUMNS: [&str; 5] = ["Day", "DTE", "Expiry Date", PROFIT_COLUMN, "India VIX"];

/// `DD-MM-YYYY`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn parse_date(value: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
