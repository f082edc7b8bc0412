use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::decimal::Money;
use crate::errors::{MaturityError, Result};
use crate::fs;
use crate::investment::Investment;
use crate::types::InvestmentKind;

/// one investment as written in the financial details document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    #[serde(rename = "Principal")]
    pub principal: Money,
    /// annual rate in percent
    #[serde(rename = "Rate")]
    pub rate: Decimal,
    #[serde(rename = "Time")]
    pub time: Decimal,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date")]
    pub end_date: String,
}

/// investment records keyed by instrument label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialDetails {
    records: HashMap<String, Vec<InvestmentRecord>>,
}

impl FinancialDetails {
    pub fn new(records: HashMap<String, Vec<InvestmentRecord>>) -> Self {
        Self { records }
    }

    /// load the financial details document from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        Self::from_json(&data).map_err(|source| MaturityError::InvalidFinancialDetails {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(data: &str) -> std::result::Result<Self, serde_json::Error> {
        let details: Self = serde_json::from_str(data)?;
        info!(
            "Loaded {} investment records across {} types",
            details.records.values().map(Vec::len).sum::<usize>(),
            details.records.len()
        );
        Ok(details)
    }

    /// raw records under `label`, if the document has that key
    pub fn records(&self, label: &str) -> Option<&[InvestmentRecord]> {
        self.records.get(label).map(Vec::as_slice)
    }

    /// typed investments for the instrument named by `label`, in input order
    pub fn investments(&self, label: &str) -> Result<Vec<Investment>> {
        let kind: InvestmentKind = label.parse()?;
        self.investments_of(kind)
    }

    /// typed investments of `kind`, in input order
    pub fn investments_of(&self, kind: InvestmentKind) -> Result<Vec<Investment>> {
        let Some(records) = self.records(kind.label()) else {
            debug!("No {kind} records present");
            return Ok(Vec::new());
        };
        records
            .iter()
            .map(|record| Investment::from_record(kind, record))
            .collect()
    }
}
