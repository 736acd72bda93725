//! One "process" action over a loaded trade log.

use tracing::{debug, warn};

use super::error::PnlError;
use super::metrics::{self, CapitalBase, EquityPoint, SummaryStats};
use super::range::{self, DateRange};
use super::record::DailyRecord;

/// Filtered records plus the derived equity series for a single window.
///
/// Owns copies of the records it selected, so it never aliases the loaded
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    range: DateRange,
    capital_base: CapitalBase,
    records: Vec<DailyRecord>,
    equity: Vec<EquityPoint>,
}

impl Analysis {
    pub fn run(table: &[DailyRecord], range: DateRange, capital_base: CapitalBase) -> Self {
        if range.is_inverted() {
            warn!(%range, "start date is after end date; window selects no records");
        }
        let records = range::filter(table, &range);
        let equity = metrics::build_equity_series(&records);
        debug!(
            %range,
            loaded = table.len(),
            selected = records.len(),
            "filtered trade log"
        );
        Self {
            range,
            capital_base,
            records,
            equity,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn capital_base(&self) -> CapitalBase {
        self.capital_base
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn equity(&self) -> &[EquityPoint] {
        &self.equity
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> Result<SummaryStats, PnlError> {
        SummaryStats::compute(&self.records, self.capital_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn table() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new(date(1), 40.0),
            DailyRecord::new(date(4), -10.0),
            DailyRecord::new(date(5), 25.0),
            DailyRecord::new(date(6), -60.0),
        ]
    }

    #[test]
    fn run_filters_then_accumulates() {
        let analysis = Analysis::run(
            &table(),
            DateRange::new(date(4), date(6)),
            CapitalBase::default(),
        );
        assert_eq!(analysis.records().len(), 3);
        let equity: Vec<f64> = analysis
            .equity()
            .iter()
            .map(|p| p.cumulative_profit)
            .collect();
        assert_eq!(equity, vec![-10.0, 15.0, -45.0]);
    }

    #[test]
    fn summary_is_scoped_to_window() {
        let analysis = Analysis::run(
            &table(),
            DateRange::new(date(5), date(6)),
            CapitalBase::new(1_000.0).unwrap(),
        );
        let stats = analysis.summary().unwrap();
        assert_eq!(stats.overall_profit, -35.0);
        assert!((stats.overall_profit_percentage - (-3.5)).abs() < 1e-12);
        assert_eq!(stats.max_profit, 25.0);
        assert_eq!(stats.max_drawdown, 60.0);
    }

    #[test]
    fn inverted_window_is_empty() {
        let analysis = Analysis::run(
            &table(),
            DateRange::new(date(6), date(1)),
            CapitalBase::default(),
        );
        assert!(analysis.is_empty());
        assert!(analysis.equity().is_empty());
        assert!(matches!(
            analysis.summary(),
            Err(PnlError::EmptyRange { .. })
        ));
    }

    #[test]
    fn accessors_echo_inputs() {
        let range = DateRange::new(date(1), date(31));
        let capital = CapitalBase::new(250_000.0).unwrap();
        let analysis = Analysis::run(&table(), range, capital);
        assert_eq!(analysis.range(), range);
        assert_eq!(analysis.capital_base(), capital);
        assert_eq!(analysis.records(), table().as_slice());
    }
}
