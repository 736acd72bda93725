//! Statistic tables for reports and console output.

use super::chart_svg::fmt_amount;
use crate::domain::analysis::Analysis;
use crate::domain::error::PnlError;
use crate::domain::metrics;

const UNDEFINED: &str = "n/a";

fn fmt_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

fn or_undefined(value: Result<f64, PnlError>, fmt: fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|_| UNDEFINED.to_string())
}

/// Label/value pairs for the seven statistics, in display order.
///
/// Statistics that are undefined over an empty window show as `n/a`; sums and
/// drawdown show zero.
pub fn summary_rows(analysis: &Analysis) -> Vec<(&'static str, String)> {
    let records = analysis.records();
    vec![
        ("Overall Profit", fmt_amount(metrics::overall_profit(records))),
        (
            "Overall Profit Percentage",
            fmt_pct(metrics::overall_profit_percentage(
                records,
                analysis.capital_base(),
            )),
        ),
        ("Max Profit", or_undefined(metrics::max_profit(records), fmt_amount)),
        ("Max Loss", or_undefined(metrics::max_loss(records), fmt_amount)),
        (
            "Loss Percentage (Days)",
            or_undefined(metrics::loss_percentage(records), fmt_pct),
        ),
        (
            "Win Percentage (Days)",
            or_undefined(metrics::win_percentage(records), fmt_pct),
        ),
        ("Max Drawdown", fmt_amount(metrics::max_drawdown(records))),
    ]
}

pub fn render_summary_markdown(analysis: &Analysis) -> String {
    let mut output = format!("## Analysis Results\n\n{}\n\n", analysis.range());
    output.push_str(&format!("Trading days: {}\n\n", analysis.records().len()));
    output.push_str("| Statistic | Value |\n| --- | --- |\n");
    for (label, value) in summary_rows(analysis) {
        output.push_str(&format!("| {} | {} |\n", label, value));
    }
    output
}
