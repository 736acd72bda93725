//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use crate::adapters::clean_adapter::CleanAdapter;
use crate::adapters::csv_adapter::CsvTradeLogAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::svg_report::{SvgReportAdapter, tables};
use crate::domain::analysis::Analysis;
use crate::domain::cleaning::{DEFAULT_DATE_COLUMN, DEFAULT_SKIP_ROWS};
use crate::domain::config_validation::{validate_analysis_config, validate_clean_config};
use crate::domain::error::PnlError;
use crate::domain::metrics::{CapitalBase, DEFAULT_CAPITAL_BASE};
use crate::domain::range::{self, DateRange};
use crate::domain::record::DailyRecord;
use crate::domain::schema;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::trade_log_port::TradeLogPort;

/// Where `clean` writes when neither flag nor config names a directory.
pub const DEFAULT_CLEAN_DIR: &str = "PNL_BACKTEST";

#[derive(Parser, Debug)]
#[command(name = "pnlscope", about = "Daily trading log performance analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute statistics and charts for a date window
    Analyze {
        /// Cleaned trade log (Date, Profit columns)
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// First day of the window (DD-MM-YYYY)
        #[arg(long)]
        start: Option<String>,
        /// Last day of the window (DD-MM-YYYY)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        capital_base: Option<f64>,
        /// Directory for charts and summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Clean a raw backtest export into a trade log
    Clean {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        skip_rows: Option<usize>,
        #[arg(long)]
        date_column: Option<usize>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show record count and date span of a trade log
    Info {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOverrides {
    pub data: Option<PathBuf>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub capital_base: Option<f64>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub data_path: PathBuf,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub capital_base: CapitalBase,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanConfig {
    pub skip_rows: usize,
    pub date_column: usize,
    pub output_dir: PathBuf,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            data,
            config,
            start,
            end,
            capital_base,
            output,
        } => run_analyze(
            config.as_ref(),
            AnalyzeOverrides {
                data,
                start,
                end,
                capital_base,
                output,
            },
        ),
        Command::Clean {
            input,
            output_dir,
            skip_rows,
            date_column,
            config,
        } => run_clean(&input, output_dir, skip_rows, date_column, config.as_ref()),
        Command::Info { data, config } => run_info(data, config.as_ref()),
    }
}

/// Load the INI file at `path`, or an empty config when none was given.
pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::default());
    };
    eprintln!("Loading config from {}", path.display());
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = PnlError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_analysis_config(
    config: &dyn ConfigPort,
    overrides: &AnalyzeOverrides,
) -> Result<AnalysisConfig, PnlError> {
    let data_path = match &overrides.data {
        Some(path) => path.clone(),
        None => config
            .get_string("data", "path")
            .map(PathBuf::from)
            .ok_or_else(|| PnlError::ConfigMissing {
                section: "data".into(),
                key: "path".into(),
            })?,
    };

    let start = match &overrides.start {
        Some(s) => Some(range::parse_bound("start", s)?),
        None => config.get_date("analysis", "start_date")?,
    };
    let end = match &overrides.end {
        Some(s) => Some(range::parse_bound("end", s)?),
        None => config.get_date("analysis", "end_date")?,
    };

    let capital_base = CapitalBase::new(
        overrides
            .capital_base
            .unwrap_or_else(|| config.get_double("analysis", "capital_base", DEFAULT_CAPITAL_BASE)),
    )?;

    let output_dir = overrides
        .output
        .clone()
        .or_else(|| config.get_string("report", "output_dir").map(PathBuf::from));

    Ok(AnalysisConfig {
        data_path,
        start,
        end,
        capital_base,
        output_dir,
    })
}

pub fn build_clean_config(
    config: &dyn ConfigPort,
    output_dir: Option<PathBuf>,
    skip_rows: Option<usize>,
    date_column: Option<usize>,
) -> Result<CleanConfig, PnlError> {
    let from_config = |key: &str, default: usize| -> Result<usize, PnlError> {
        let value = config.get_int("clean", key, default as i64);
        usize::try_from(value).map_err(|_| PnlError::ConfigInvalid {
            section: "clean".to_string(),
            key: key.to_string(),
            reason: format!("{} must be a non-negative integer, got {}", key, value),
        })
    };
    let skip_rows = match skip_rows {
        Some(n) => n,
        None => from_config("skip_rows", DEFAULT_SKIP_ROWS)?,
    };
    let date_column = match date_column {
        Some(n) => n,
        None => from_config("date_column", DEFAULT_DATE_COLUMN)?,
    };
    Ok(CleanConfig {
        skip_rows,
        date_column,
        output_dir: output_dir
            .or_else(|| config.get_string("clean", "output_dir").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLEAN_DIR)),
    })
}

/// Window to analyze: configured bounds, falling back to the first and last
/// loaded date. `None` only when a bound is missing and the log is empty.
pub fn resolve_range(config: &AnalysisConfig, table: &[DailyRecord]) -> Option<DateRange> {
    let span = DateRange::spanning(table);
    let start = config.start.or(span.map(|r| r.start))?;
    let end = config.end.or(span.map(|r| r.end))?;
    Some(DateRange::new(start, end))
}

/// Load, filter and accumulate. Statistics are left to the caller.
pub fn analyze(port: &dyn TradeLogPort, config: &AnalysisConfig) -> Result<Analysis, PnlError> {
    let table = port.load()?;
    let range = resolve_range(config, &table).ok_or_else(|| PnlError::Ingest {
        reason: format!("{} has no records", config.data_path.display()),
    })?;
    Ok(Analysis::run(&table, range, config.capital_base))
}

pub fn print_summary(analysis: &Analysis) {
    println!("=== Analysis Results: {} ===", analysis.range());
    println!("Trading Days:               {}", analysis.records().len());
    for (label, value) in tables::summary_rows(analysis) {
        println!("{:<28}{}", format!("{label}:"), value);
    }
}

fn run_analyze(config_path: Option<&PathBuf>, overrides: AnalyzeOverrides) -> ExitCode {
    // Stage 1: Load and validate config
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    if let Err(e) = validate_analysis_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Merge flags over config
    let config = match build_analysis_config(&adapter, &overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Load, filter, accumulate
    eprintln!("Loading trade log from {}", config.data_path.display());
    let port = CsvTradeLogAdapter::new(config.data_path.clone());
    let analysis = match analyze(&port, &config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    info!(
        range = %analysis.range(),
        records = analysis.records().len(),
        "analysis complete"
    );

    // Stage 4: Console summary
    print_summary(&analysis);

    // Stage 5: Report
    if let Some(dir) = &config.output_dir {
        if let Err(e) = SvgReportAdapter::new().write(&analysis, dir) {
            eprintln!("error: failed to write report: {e}");
            return (&e).into();
        }
        eprintln!("\nReport written to: {}", dir.display());
    }

    ExitCode::SUCCESS
}

fn run_clean(
    input: &Path,
    output_dir: Option<PathBuf>,
    skip_rows: Option<usize>,
    date_column: Option<usize>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    if let Err(e) = validate_clean_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    let config = match build_clean_config(&adapter, output_dir, skip_rows, date_column) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Cleaning {}", input.display());
    let cleaner = CleanAdapter::new(config.skip_rows, config.date_column);
    let result = cleaner
        .read(input)
        .and_then(|table| cleaner.write(&table, &config.output_dir).map(|p| (p, table.rows.len())));

    match result {
        Ok((path, rows)) => {
            eprintln!("Data cleaned and saved to {} ({} rows)", path.display(), rows);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(data: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let path = match data.or_else(|| adapter.get_string("data", "path").map(PathBuf::from)) {
        Some(p) => p,
        None => {
            eprintln!("error: --data is required (or set [data] path in config)");
            return ExitCode::from(2);
        }
    };

    let port = CsvTradeLogAdapter::new(path);
    match port.date_bounds() {
        Ok(Some((first, last, count))) => {
            println!(
                "{}: {} records, {} to {}",
                port.path().display(),
                count,
                schema::format_date(first),
                schema::format_date(last)
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}: no records found", port.path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
