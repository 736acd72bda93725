//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod clean_adapter;
pub mod file_config_adapter;
pub mod svg_report;
