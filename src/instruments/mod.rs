pub mod fixed_deposit;
pub mod provident_fund;
pub mod recurring_deposit;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::investment::Investment;
use crate::tenure::Tenure;
use crate::types::InvestmentKind;

pub use fixed_deposit::FixedDeposit;
pub use provident_fund::PublicProvidentFund;
pub use recurring_deposit::RecurringDeposit;

/// maturity calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityCalculation {
    pub kind: InvestmentKind,
    pub principal: Money,
    pub rate: Rate,
    pub tenure: Tenure,
    pub total_deposited: Money,
    pub maturity_amount: Money,
    pub interest_earned: Money,
    pub calculation_method: String,
}

/// trait for per-instrument maturity formulas
pub trait MaturityCalculator {
    fn maturity(&self, investment: &Investment, tenure: Tenure) -> Result<MaturityCalculation>;
}

impl InvestmentKind {
    /// formula used for this kind of instrument
    pub fn calculator(&self) -> &'static dyn MaturityCalculator {
        match self {
            InvestmentKind::FixedDeposit => &FixedDeposit,
            InvestmentKind::RecurringDeposit => &RecurringDeposit,
            InvestmentKind::PublicProvidentFund => &PublicProvidentFund,
        }
    }
}
