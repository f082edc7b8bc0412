use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::decimal::Money;
use crate::errors::{MaturityError, Result};
use crate::instruments::MaturityCalculation;
use crate::properties::UserDetails;
use crate::records::FinancialDetails;
use crate::types::{InvestmentKind, OutputFormat};

/// instrument groups that appear in the report, in output order
pub const REPORTED_KINDS: [InvestmentKind; 2] =
    [InvestmentKind::FixedDeposit, InvestmentKind::RecurringDeposit];

/// one evaluated investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub description: String,
    pub calculation: MaturityCalculation,
}

/// user details and maturity amounts for a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityReport {
    pub as_of: DateTime<Utc>,
    pub user_details: UserDetails,
    pub entries: Vec<ReportEntry>,
}

impl MaturityReport {
    /// load both input files and evaluate every reported investment.
    ///
    /// The evaluation instant is read once, from `config.as_of` when set and
    /// from `time_provider` otherwise, and shared by every calculation.
    pub fn generate(config: &ReportConfig, time_provider: &SafeTimeProvider) -> Result<Self> {
        let now = config.as_of.unwrap_or_else(|| time_provider.now());
        debug!("Evaluating maturity as of {now}");

        let user_details = UserDetails::load(&config.user_details)?;
        let financial_details = FinancialDetails::load(&config.financial_details)?;
        Self::evaluate(user_details, &financial_details, now)
    }

    /// evaluate already loaded inputs as of `now`
    pub fn evaluate(
        user_details: UserDetails,
        financial_details: &FinancialDetails,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let mut entries = Vec::new();
        for kind in REPORTED_KINDS {
            let investments = financial_details.investments_of(kind)?;
            info!("Evaluating {} {kind} investments", investments.len());
            for investment in investments {
                let calculation = investment.maturity(now)?;
                debug!(
                    "{kind}: {} over {} days matures to {}",
                    investment.principal, calculation.tenure.days, calculation.maturity_amount
                );
                entries.push(ReportEntry {
                    description: investment.to_string(),
                    calculation,
                });
            }
        }

        Ok(Self {
            as_of: now,
            user_details,
            entries,
        })
    }

    /// maturity amounts in report order
    pub fn amounts(&self) -> Vec<Money> {
        self.entries
            .iter()
            .map(|entry| entry.calculation.maturity_amount)
            .collect()
    }

    /// plain text report lines
    pub fn lines(&self, show_investments: bool) -> Vec<String> {
        let mut lines = self.user_details.lines();
        for entry in &self.entries {
            if show_investments {
                lines.push(entry.description.clone());
            }
            lines.push(entry.calculation.maturity_amount.to_string());
        }
        lines
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| MaturityError::Serialization { source })
    }

    /// render in the configured output format
    pub fn render(&self, config: &ReportConfig) -> Result<String> {
        match config.format {
            OutputFormat::Text => Ok(self.lines(config.show_investments).join("\n")),
            OutputFormat::Json => self.to_json_pretty(),
        }
    }

    pub fn print(&self, config: &ReportConfig) -> Result<()> {
        println!("{}", self.render(config)?);
        Ok(())
    }
}
