//! Equity series construction and performance statistics.
//!
//! Every function here is a pure fold over an ascending, already-filtered
//! table. Sums and drawdown have a natural zero over no records; extrema and
//! day ratios do not and return [`PnlError::EmptyRange`].

use chrono::NaiveDate;

use super::error::PnlError;
use super::record::DailyRecord;

/// Notional account size used when none is configured.
pub const DEFAULT_CAPITAL_BASE: f64 = 1_000_000.0;

/// Reference capital for [`overall_profit_percentage`]. Always finite and
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapitalBase(f64);

impl CapitalBase {
    pub fn new(value: f64) -> Result<Self, PnlError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(PnlError::InvalidCapitalBase { value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for CapitalBase {
    fn default() -> Self {
        Self(DEFAULT_CAPITAL_BASE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub cumulative_profit: f64,
}

/// Running sum of profit, one point per record.
pub fn build_equity_series(table: &[DailyRecord]) -> Vec<EquityPoint> {
    table
        .iter()
        .scan(0.0_f64, |total, r| {
            *total += r.profit;
            Some(EquityPoint {
                date: r.date,
                cumulative_profit: *total,
            })
        })
        .collect()
}

/// Sum of profit; `+0.0` for an empty table.
pub fn overall_profit(table: &[DailyRecord]) -> f64 {
    table.iter().fold(0.0, |total, r| total + r.profit)
}

pub fn overall_profit_percentage(table: &[DailyRecord], capital_base: CapitalBase) -> f64 {
    overall_profit(table) / capital_base.value() * 100.0
}

pub fn max_profit(table: &[DailyRecord]) -> Result<f64, PnlError> {
    table
        .iter()
        .map(|r| r.profit)
        .reduce(f64::max)
        .ok_or(PnlError::EmptyRange {
            statistic: "max profit",
        })
}

pub fn max_loss(table: &[DailyRecord]) -> Result<f64, PnlError> {
    table
        .iter()
        .map(|r| r.profit)
        .reduce(f64::min)
        .ok_or(PnlError::EmptyRange {
            statistic: "max loss",
        })
}

pub fn loss_percentage(table: &[DailyRecord]) -> Result<f64, PnlError> {
    day_percentage(table, DailyRecord::is_loss, "loss percentage")
}

pub fn win_percentage(table: &[DailyRecord]) -> Result<f64, PnlError> {
    day_percentage(table, DailyRecord::is_win, "win percentage")
}

fn day_percentage(
    table: &[DailyRecord],
    predicate: fn(&DailyRecord) -> bool,
    statistic: &'static str,
) -> Result<f64, PnlError> {
    if table.is_empty() {
        return Err(PnlError::EmptyRange { statistic });
    }
    let hits = table.iter().filter(|r| predicate(r)).count();
    Ok(hits as f64 / table.len() as f64 * 100.0)
}

/// Largest decline of cumulative profit below its running peak.
///
/// The peak starts at the first equity value, not at zero, so a window that
/// opens with a loss has no drawdown until it recovers and falls again.
pub fn max_drawdown(table: &[DailyRecord]) -> f64 {
    let mut equity = 0.0_f64;
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;

    for r in table {
        equity += r.profit;
        if equity > peak {
            peak = equity;
        }
        let dd = peak - equity;
        if dd > max_dd {
            max_dd = dd;
        }
    }

    max_dd
}

/// The seven headline statistics for one date window.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub overall_profit: f64,
    pub overall_profit_percentage: f64,
    pub max_profit: f64,
    pub max_loss: f64,
    pub loss_percentage: f64,
    pub win_percentage: f64,
    pub max_drawdown: f64,
}

impl SummaryStats {
    /// Single pass over `table`. Fails on an empty table since the extrema and
    /// day ratios have no value there.
    pub fn compute(table: &[DailyRecord], capital_base: CapitalBase) -> Result<Self, PnlError> {
        if table.is_empty() {
            return Err(PnlError::EmptyRange {
                statistic: "summary statistics",
            });
        }

        let mut equity = 0.0_f64;
        let mut peak = f64::NEG_INFINITY;
        let mut max_drawdown = 0.0_f64;
        let mut max_profit = f64::NEG_INFINITY;
        let mut max_loss = f64::INFINITY;
        let mut wins = 0usize;
        let mut losses = 0usize;

        for r in table {
            equity += r.profit;
            peak = peak.max(equity);
            max_drawdown = max_drawdown.max(peak - equity);

            max_profit = max_profit.max(r.profit);
            max_loss = max_loss.min(r.profit);

            if r.is_win() {
                wins += 1;
            } else if r.is_loss() {
                losses += 1;
            }
        }

        let n = table.len() as f64;
        Ok(SummaryStats {
            overall_profit: equity,
            overall_profit_percentage: equity / capital_base.value() * 100.0,
            max_profit,
            max_loss,
            loss_percentage: losses as f64 / n * 100.0,
            win_percentage: wins as f64 / n * 100.0,
            max_drawdown,
        })
    }
}
