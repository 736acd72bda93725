//! Domain error types.

/// Top-level error type for pnlscope.
#[derive(Debug, thiserror::Error)]
pub enum PnlError {
    #[error("invalid {bound} date {value:?} (expected DD-MM-YYYY)")]
    InvalidRange { bound: &'static str, value: String },

    #[error("no records in selected range: {statistic} is undefined")]
    EmptyRange { statistic: &'static str },

    #[error("capital base must be a positive number, got {value}")]
    InvalidCapitalBase { value: f64 },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade log error: {reason}")]
    Ingest { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PnlError> for std::process::ExitCode {
    fn from(err: &PnlError) -> Self {
        let code: u8 = match err {
            PnlError::Io(_) => 1,
            PnlError::ConfigParse { .. }
            | PnlError::ConfigMissing { .. }
            | PnlError::ConfigInvalid { .. }
            | PnlError::InvalidCapitalBase { .. } => 2,
            PnlError::Ingest { .. } => 3,
            PnlError::InvalidRange { .. } => 4,
            PnlError::EmptyRange { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
