//! SVG chart and markdown summary report.
//!
//! Writes `profit.svg`, `equity.svg` and `summary.md` into an output
//! directory. Chart helpers live in `chart_svg`, statistic tables in `tables`.

pub mod chart_svg;
pub mod tables;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::analysis::Analysis;
use crate::domain::error::PnlError;
use crate::ports::report_port::ReportPort;

pub const PROFIT_CHART_FILE: &str = "profit.svg";
pub const EQUITY_CHART_FILE: &str = "equity.svg";
pub const SUMMARY_FILE: &str = "summary.md";

#[derive(Debug, Default)]
pub struct SvgReportAdapter;

impl SvgReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

pub fn profit_title(analysis: &Analysis) -> String {
    format!("Profit from {}", analysis.range())
}

pub fn equity_title(analysis: &Analysis) -> String {
    format!("Equity Curve from {}", analysis.range())
}

fn write_or_remove(path: &Path, svg: &str) -> Result<(), PnlError> {
    if !svg.is_empty() {
        fs::write(path, svg)?;
        return Ok(());
    }
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale chart");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl ReportPort for SvgReportAdapter {
    fn write(&self, analysis: &Analysis, output_dir: &Path) -> Result<(), PnlError> {
        fs::create_dir_all(output_dir)?;

        // An empty window has no charts; files left by an earlier run go too.
        let profit_svg = chart_svg::generate_profit_svg(analysis.records(), &profit_title(analysis));
        write_or_remove(&output_dir.join(PROFIT_CHART_FILE), &profit_svg)?;

        let equity_svg = chart_svg::generate_equity_svg(analysis.equity(), &equity_title(analysis));
        write_or_remove(&output_dir.join(EQUITY_CHART_FILE), &equity_svg)?;

        fs::write(
            output_dir.join(SUMMARY_FILE),
            tables::render_summary_markdown(analysis),
        )?;

        info!(dir = %output_dir.display(), "report written");
        Ok(())
    }
}
