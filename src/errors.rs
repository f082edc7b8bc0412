use std::path::PathBuf;

use thiserror::Error;

use crate::types::InvestmentKind;

#[derive(Error, Debug)]
pub enum MaturityError {
    #[error("input file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
    },

    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid financial details in {}: {source}", path.display())]
    InvalidFinancialDetails {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed property on line {line_number}: {line:?}")]
    MalformedProperty {
        line_number: usize,
        line: String,
    },

    #[error("malformed date: {value:?} does not match DD-MM-YYYY HH:MM:SS.ffffff")]
    MalformedDate {
        value: String,
    },

    #[error("unknown investment type: {label}")]
    UnknownInvestmentType {
        label: String,
    },

    #[error("maturity calculation not implemented for {kind}")]
    NotImplemented {
        kind: InvestmentKind,
    },

    #[error("unable to serialize report: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid amount: {value}")]
    InvalidAmount {
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, MaturityError>;
