use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::OutputFormat;

pub const DEFAULT_FINANCIAL_DETAILS: &str = "data/financial-details.json";
pub const DEFAULT_USER_DETAILS: &str = "data/user-details.prop";

/// report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub financial_details: PathBuf,
    pub user_details: PathBuf,
    /// fixed evaluation instant; the system clock is used when absent
    pub as_of: Option<DateTime<Utc>>,
    pub format: OutputFormat,
    pub show_investments: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            financial_details: PathBuf::from(DEFAULT_FINANCIAL_DETAILS),
            user_details: PathBuf::from(DEFAULT_USER_DETAILS),
            as_of: None,
            format: OutputFormat::Text,
            show_investments: false,
        }
    }
}

impl ReportConfig {
    pub fn new(financial_details: impl Into<PathBuf>, user_details: impl Into<PathBuf>) -> Self {
        Self {
            financial_details: financial_details.into(),
            user_details: user_details.into(),
            ..Self::default()
        }
    }

    pub fn as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn show_investments(mut self, show: bool) -> Self {
        self.show_investments = show;
        self
    }
}
