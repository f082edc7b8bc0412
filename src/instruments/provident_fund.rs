use crate::errors::{MaturityError, Result};
use crate::instruments::{MaturityCalculation, MaturityCalculator};
use crate::investment::Investment;
use crate::tenure::Tenure;

/// public provident fund; records load but maturity is not modelled yet
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicProvidentFund;

impl MaturityCalculator for PublicProvidentFund {
    fn maturity(&self, investment: &Investment, _tenure: Tenure) -> Result<MaturityCalculation> {
        Err(MaturityError::NotImplemented {
            kind: investment.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::InvestmentKind;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_maturity_is_not_implemented() {
        let start = Utc.with_ymd_and_hms(2015, 4, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2030, 4, 1, 0, 0, 0).unwrap();
        let ppf = Investment::new(
            InvestmentKind::PublicProvidentFund,
            Money::from_major(150_000),
            Rate::from_percentage(dec!(7.1)),
            dec!(15),
            start,
            end,
        );

        let err = ppf.maturity(end).unwrap_err();

        assert!(matches!(
            err,
            MaturityError::NotImplemented {
                kind: InvestmentKind::PublicProvidentFund
            }
        ));
        assert_eq!(
            err.to_string(),
            "maturity calculation not implemented for Public Provident Fund"
        );
    }
}
