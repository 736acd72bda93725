//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

/// Empty configuration; every lookup falls back to its default.
impl Default for FileConfigAdapter {
    fn default() -> Self {
        Self { config: Ini::new() }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PnlError;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_all_sections() {
        let content = r#"
[analysis]
capital_base = 500000
start_date = 01-01-2024
end_date = 31-03-2024

[data]
path = PNL_BACKTEST/df1.csv

[report]
output_dir = report

[clean]
skip_rows = 1
date_column = 1
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(adapter.get_double("analysis", "capital_base", 0.0), 500_000.0);
        assert_eq!(
            adapter.get_string("data", "path"),
            Some("PNL_BACKTEST/df1.csv".to_string())
        );
        assert_eq!(
            adapter.get_string("report", "output_dir"),
            Some("report".to_string())
        );
        assert_eq!(adapter.get_int("clean", "skip_rows", 0), 1);
        assert_eq!(
            adapter.get_date("analysis", "end_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31)
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[data]\npath = a.csv\n").unwrap();
        assert_eq!(adapter.get_string("data", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_default_for_missing_or_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[clean]\nskip_rows = abc\n").unwrap();
        assert_eq!(adapter.get_int("clean", "skip_rows", 1), 1);
        assert_eq!(adapter.get_int("clean", "date_column", 7), 7);
    }

    #[test]
    fn get_double_returns_default_for_missing_or_non_numeric() {
        let adapter =
            FileConfigAdapter::from_string("[analysis]\ncapital_base = lots\n").unwrap();
        assert_eq!(adapter.get_double("analysis", "capital_base", 99.9), 99.9);
        assert_eq!(adapter.get_double("analysis", "missing", 1.5), 1.5);
    }

    #[test]
    fn get_date_absent_or_blank_is_none() {
        let adapter = FileConfigAdapter::from_string("[analysis]\nstart_date =\n").unwrap();
        assert_eq!(adapter.get_date("analysis", "start_date").unwrap(), None);
        assert_eq!(adapter.get_date("analysis", "end_date").unwrap(), None);
    }

    #[test]
    fn get_date_rejects_wrong_format() {
        let adapter =
            FileConfigAdapter::from_string("[analysis]\nstart_date = 2024-01-01\n").unwrap();
        let err = adapter.get_date("analysis", "start_date").unwrap_err();
        assert!(matches!(err, PnlError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn default_is_empty() {
        let adapter = FileConfigAdapter::default();
        assert_eq!(adapter.get_string("data", "path"), None);
        assert_eq!(adapter.get_double("analysis", "capital_base", 3.0), 3.0);
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[report]\noutput_dir = /tmp/out\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("report", "output_dir"),
            Some("/tmp/out".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/config.ini");
        assert!(result.is_err());
    }
}
