use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MaturityError;

/// textual format of every start/end timestamp in the input document
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S%.f";

/// format used when echoing timestamps back in descriptions
pub const DATE_DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S%.6f";

/// savings instrument types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentKind {
    #[serde(rename = "Fixed Deposit")]
    FixedDeposit,
    #[serde(rename = "Recurring Deposit")]
    RecurringDeposit,
    #[serde(rename = "Public Provident Fund")]
    PublicProvidentFund,
}

impl InvestmentKind {
    pub const ALL: [InvestmentKind; 3] = [
        InvestmentKind::FixedDeposit,
        InvestmentKind::RecurringDeposit,
        InvestmentKind::PublicProvidentFund,
    ];

    /// canonical label, also the top-level key in the financial details document
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentKind::FixedDeposit => "Fixed Deposit",
            InvestmentKind::RecurringDeposit => "Recurring Deposit",
            InvestmentKind::PublicProvidentFund => "Public Provident Fund",
        }
    }
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestmentKind {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvestmentKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| MaturityError::UnknownInvestmentType {
                label: s.to_string(),
            })
    }
}

/// output format of the maturity report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
