//! SVG chart rendering for reports.

use chrono::NaiveDate;

use crate::domain::metrics::EquityPoint;
use crate::domain::record::DailyRecord;
use crate::domain::schema;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GAIN_FILL: &str = "#16a34a";
const LOSS_FILL: &str = "#dc2626";
const LINE_STROKE: &str = "#2563eb";

pub(crate) fn fmt_amount(value: f64) -> String {
    if value < 0.0 {
        format!("-{:.2}", value.abs())
    } else {
        format!("{:.2}", value)
    }
}

fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Opening tag, background, title, axes, y-labels and the three date labels
/// shared by both charts.
fn frame(title: &str, min: f64, max: f64, dates: (NaiveDate, NaiveDate, NaiveDate)) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"##,
        CHART_WIDTH, CHART_HEIGHT, CHART_WIDTH, CHART_HEIGHT
    ));
    svg.push_str("\n  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"18\" font-size=\"13\" fill=\"#333\">{}</text>\n",
        MARGIN_LEFT, title
    ));
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ccc\" stroke-width=\"1\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        CHART_HEIGHT - MARGIN_BOTTOM
    ));
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ccc\" stroke-width=\"1\"/>\n",
        MARGIN_LEFT,
        CHART_HEIGHT - MARGIN_BOTTOM,
        CHART_WIDTH - MARGIN_RIGHT,
        CHART_HEIGHT - MARGIN_BOTTOM
    ));
    for (y, value) in [
        (MARGIN_TOP + 5.0, max),
        (MARGIN_TOP + plot_height() / 2.0, (max + min) / 2.0),
        (CHART_HEIGHT - MARGIN_BOTTOM - 5.0, min),
    ] {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"10\" fill=\"#666\">{}</text>\n",
            MARGIN_LEFT - 5.0,
            y,
            fmt_amount(value)
        ));
    }
    let (start, mid, end) = dates;
    for (x, date) in [
        (MARGIN_LEFT, start),
        (MARGIN_LEFT + plot_width() / 2.0, mid),
        (CHART_WIDTH - MARGIN_RIGHT, end),
    ] {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"10\" fill=\"#666\">{}</text>\n",
            x,
            CHART_HEIGHT - 10.0,
            schema::format_date(date)
        ));
    }
    svg
}

fn label_dates(dates: &[NaiveDate]) -> Option<(NaiveDate, NaiveDate, NaiveDate)> {
    let start = *dates.first()?;
    let end = *dates.last()?;
    Some((start, dates[dates.len() / 2], end))
}

/// Bar chart of daily profit around a zero baseline. Empty for no records.
pub fn generate_profit_svg(records: &[DailyRecord], title: &str) -> String {
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    let Some(labels) = label_dates(&dates) else {
        return String::new();
    };

    let max = records.iter().map(|r| r.profit).fold(0.0_f64, f64::max);
    let min = records.iter().map(|r| r.profit).fold(0.0_f64, f64::min);
    let range = (max - min).max(1.0);

    let y_scale = |v: f64| -> f64 { MARGIN_TOP + plot_height() - ((v - min) / range) * plot_height() };
    let slot = plot_width() / records.len() as f64;
    let bar_width = (slot * 0.8).max(1.0);
    let baseline = y_scale(0.0);

    let mut svg = frame(title, min, max, labels);
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{:.1}\" x2=\"{}\" y2=\"{:.1}\" stroke=\"#999\" stroke-width=\"1\"/>\n",
        MARGIN_LEFT,
        baseline,
        CHART_WIDTH - MARGIN_RIGHT,
        baseline
    ));
    for (i, r) in records.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = y_scale(r.profit);
        let (top, height) = if y < baseline {
            (y, baseline - y)
        } else {
            (baseline, y - baseline)
        };
        let fill = if r.profit < 0.0 { LOSS_FILL } else { GAIN_FILL };
        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
            x, top, bar_width, height, fill
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Line chart of cumulative profit. Empty for no points.
pub fn generate_equity_svg(equity: &[EquityPoint], title: &str) -> String {
    let dates: Vec<NaiveDate> = equity.iter().map(|p| p.date).collect();
    let Some(labels) = label_dates(&dates) else {
        return String::new();
    };

    let min = equity
        .iter()
        .map(|p| p.cumulative_profit)
        .fold(f64::INFINITY, f64::min);
    let max = equity
        .iter()
        .map(|p| p.cumulative_profit)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = (max - min).max(1.0);

    let x_scale =
        |i: usize| -> f64 { MARGIN_LEFT + (i as f64 / (equity.len() - 1).max(1) as f64) * plot_width() };
    let y_scale = |v: f64| -> f64 { MARGIN_TOP + plot_height() - ((v - min) / range) * plot_height() };

    let mut path_data = String::new();
    for (i, point) in equity.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        path_data.push_str(&format!(
            "{} {:.1} {:.1}",
            cmd,
            x_scale(i),
            y_scale(point.cumulative_profit)
        ));
    }

    let mut svg = frame(title, min, max, labels);
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        path_data, LINE_STROKE
    ));
    svg.push_str("</svg>");
    svg
}
