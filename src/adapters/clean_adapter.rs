//! Raw backtest export reader and cleaned trade log writer.

use crate::domain::cleaning::{self, CleanedTable};
use crate::domain::error::PnlError;
use crate::domain::schema;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name the cleaned log is written under.
pub const CLEANED_FILE_NAME: &str = "df1.csv";

pub struct CleanAdapter {
    skip_rows: usize,
    date_column: usize,
}

impl CleanAdapter {
    pub fn new(skip_rows: usize, date_column: usize) -> Self {
        Self {
            skip_rows,
            date_column,
        }
    }

    /// Read a raw export and clean it in memory.
    pub fn read(&self, input: &Path) -> Result<CleanedTable, PnlError> {
        let content = fs::read_to_string(input).map_err(|e| PnlError::Ingest {
            reason: format!("failed to read {}: {}", input.display(), e),
        })?;
        self.clean_str(&content)
    }

    pub fn clean_str(&self, content: &str) -> Result<CleanedTable, PnlError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut lines = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PnlError::Ingest {
                reason: format!("CSV parse error: {}", e),
            })?;
            lines.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        let mut lines = lines.into_iter().skip(self.skip_rows);
        let header = lines.next().ok_or_else(|| PnlError::Ingest {
            reason: format!("no header row after skipping {} rows", self.skip_rows),
        })?;
        debug!(columns = header.len(), "read raw export header");

        cleaning::clean(&header, lines, self.date_column)
    }

    /// Write `table` to `<output_dir>/df1.csv`, creating the directory.
    pub fn write(&self, table: &CleanedTable, output_dir: &Path) -> Result<PathBuf, PnlError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(CLEANED_FILE_NAME);

        let mut wtr = csv::Writer::from_path(&path).map_err(|e| PnlError::Ingest {
            reason: format!("failed to create {}: {}", path.display(), e),
        })?;
        let write_err = |e: csv::Error| PnlError::Ingest {
            reason: format!("failed to write {}: {}", path.display(), e),
        };

        wtr.write_record(table.header()).map_err(write_err)?;
        for row in &table.rows {
            let date = schema::format_date(row.date);
            let fields = std::iter::once(date.as_str()).chain(row.values.iter().map(String::as_str));
            wtr.write_record(fields).map_err(write_err)?;
        }
        wtr.flush()?;

        info!(path = %path.display(), rows = table.rows.len(), "wrote cleaned trade log");
        Ok(path)
    }
}

impl Default for CleanAdapter {
    fn default() -> Self {
        Self::new(cleaning::DEFAULT_SKIP_ROWS, cleaning::DEFAULT_DATE_COLUMN)
    }
}
