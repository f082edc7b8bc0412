//! These structs provide the CLI interface for the maturity CLI.

use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::config::{ReportConfig, DEFAULT_FINANCIAL_DETAILS, DEFAULT_USER_DETAILS};
use crate::tenure::parse_timestamp;
use crate::types::OutputFormat;

/// maturity: compute maturity amounts of fixed and recurring deposits.
///
/// Reads investments from a JSON document keyed by instrument type ("Fixed Deposit",
/// "Recurring Deposit", "Public Provident Fund") and user details from a key=value properties
/// file. Prints each user detail followed by the maturity amount of every fixed deposit and
/// then every recurring deposit.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The JSON document holding investment records.
    #[arg(long, env = "MATURITY_FINANCIAL_DETAILS", default_value = DEFAULT_FINANCIAL_DETAILS)]
    financial_details: PathBuf,

    /// The key=value file holding user details.
    #[arg(long, env = "MATURITY_USER_DETAILS", default_value = DEFAULT_USER_DETAILS)]
    user_details: PathBuf,

    /// Evaluate as of this instant instead of now, e.g. "31-03-2024 00:00:00.000000".
    #[arg(long, value_parser = parse_timestamp)]
    as_of: Option<DateTime<Utc>>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print each investment's details before its maturity amount.
    #[arg(long)]
    show_investments: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn report_config(&self) -> ReportConfig {
        let config = ReportConfig::new(&self.financial_details, &self.user_details)
            .format(self.format)
            .show_investments(self.show_investments);
        match self.as_of {
            Some(as_of) => config.as_of(as_of),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["maturity"]).unwrap();
        let config = args.report_config();

        assert_eq!(args.log_level(), LevelFilter::WARN);
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "maturity",
            "--financial-details",
            "/tmp/fd.json",
            "--user-details",
            "/tmp/user.prop",
            "--as-of",
            "31-03-2024 00:00:00.000000",
            "--format",
            "json",
            "--show-investments",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = args.report_config();

        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        assert_eq!(config.financial_details, PathBuf::from("/tmp/fd.json"));
        assert_eq!(config.user_details, PathBuf::from("/tmp/user.prop"));
        assert_eq!(
            config.as_of,
            Some(Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_investments);
    }

    #[test]
    fn test_malformed_as_of() {
        assert!(Args::try_parse_from(["maturity", "--as-of", "2024-03-31"]).is_err());
    }
}
