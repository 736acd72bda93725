//! Report generation port trait.

use std::path::Path;

use crate::domain::analysis::Analysis;
use crate::domain::error::PnlError;

/// Port for writing the charts and summary of one analysis.
pub trait ReportPort {
    fn write(&self, analysis: &Analysis, output_dir: &Path) -> Result<(), PnlError>;
}
