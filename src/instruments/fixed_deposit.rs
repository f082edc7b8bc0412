use crate::errors::Result;
use crate::instruments::{MaturityCalculation, MaturityCalculator};
use crate::interest::{CompoundingEngine, CompoundingFrequency};
use crate::investment::Investment;
use crate::tenure::Tenure;

/// lump sum compounded quarterly over the exact elapsed tenure
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDeposit;

impl FixedDeposit {
    pub const COMPOUNDING: CompoundingFrequency = CompoundingFrequency::Quarterly;
}

impl MaturityCalculator for FixedDeposit {
    fn maturity(&self, investment: &Investment, tenure: Tenure) -> Result<MaturityCalculation> {
        let engine = CompoundingEngine::new(Self::COMPOUNDING);
        let amount = engine.future_value(investment.principal, investment.rate, tenure.years)?;

        Ok(MaturityCalculation {
            kind: investment.kind,
            principal: investment.principal,
            rate: investment.rate,
            tenure,
            total_deposited: investment.principal,
            maturity_amount: amount,
            interest_earned: amount - investment.principal,
            calculation_method: format!("{} compounding", Self::COMPOUNDING),
        })
    }
}
