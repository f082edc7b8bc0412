use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::Result;
use crate::instruments::{MaturityCalculation, MaturityCalculator};
use crate::interest::{CompoundingEngine, CompoundingFrequency};
use crate::investment::Investment;
use crate::tenure::Tenure;

/// monthly instalments of the principal, each compounded quarterly for the
/// time it has left until maturity
///
/// The tenure is cut to whole years before it is converted to months, and the
/// instalment deposited in month `m` of `n` grows for `(n - m + 1) / 12` years.
/// Interest applies to each instalment on its own rather than to the running
/// balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecurringDeposit;

impl RecurringDeposit {
    pub const COMPOUNDING: CompoundingFrequency = CompoundingFrequency::Quarterly;
}

impl MaturityCalculator for RecurringDeposit {
    fn maturity(&self, investment: &Investment, tenure: Tenure) -> Result<MaturityCalculation> {
        let engine = CompoundingEngine::new(Self::COMPOUNDING);
        let months = tenure.whole_months();

        let instalment = investment.principal.to_f64();
        let amount: f64 = (1..=months)
            .rev()
            .map(|month| instalment * engine.growth_factor(investment.rate, month as f64 / 12.0))
            .sum();
        let amount = Money::from_f64(amount)?;

        let total_deposited =
            Money::from_decimal(investment.principal.as_decimal() * Decimal::from(months.max(0)));

        Ok(MaturityCalculation {
            kind: investment.kind,
            principal: investment.principal,
            rate: investment.rate,
            tenure,
            total_deposited,
            maturity_amount: amount,
            interest_earned: amount - total_deposited,
            calculation_method: format!(
                "{} compounding of {months} monthly instalments",
                Self::COMPOUNDING
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::tenure::parse_timestamp;
    use crate::types::InvestmentKind;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};
    use rust_decimal_macros::dec;

    fn recurring_deposit(principal: i64, rate: Decimal, start: &str, end: &str) -> Investment {
        Investment::new(
            InvestmentKind::RecurringDeposit,
            Money::from_major(principal),
            Rate::from_percentage(rate),
            dec!(2),
            parse_timestamp(start).unwrap(),
            parse_timestamp(end).unwrap(),
        )
    }

    #[test]
    fn test_two_year_recurring_deposit() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));
        let rd = recurring_deposit(
            100_000,
            dec!(6.5),
            "01-01-2021 00:00:00.000000",
            "01-01-2023 00:00:00.000000",
        );

        let result = rd.maturity(time.now()).unwrap();

        let expected: f64 = (1..=24)
            .map(|m| 100_000.0 * 1.01625_f64.powf(4.0 * (m as f64 / 12.0)))
            .sum();
        assert_eq!(result.tenure.whole_months(), 24);
        assert!((result.maturity_amount.to_f64() - expected).abs() < 1e-6);
        assert_eq!(
            result.maturity_amount.round_dp(2),
            Money::from_str_exact("2568506.04").unwrap()
        );
        assert_eq!(result.total_deposited, Money::from_major(2_400_000));
        assert_eq!(
            result.calculation_method,
            "Quarterly compounding of 24 monthly instalments"
        );
    }

    #[test]
    fn test_fractional_year_is_truncated() {
        // 547 days elapsed, so only one whole year counts
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2022, 7, 2, 0, 0, 0).unwrap(),
        ));
        let rd = recurring_deposit(
            100_000,
            dec!(6.5),
            "01-01-2021 00:00:00.000000",
            "01-01-2026 00:00:00.000000",
        );

        let result = rd.maturity(time.now()).unwrap();

        assert_eq!(result.tenure.whole_months(), 12);
        assert_eq!(
            result.maturity_amount.round_dp(2),
            Money::from_str_exact("1242864.63").unwrap()
        );
    }

    #[test]
    fn test_under_one_year_is_empty_sum() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let rd = recurring_deposit(5_000, dec!(7), "01-01-2022 00:00:00.0", "30-12-2022 00:00:00.0");

        let result = rd.maturity(now).unwrap();

        assert_eq!(result.tenure.whole_months(), 0);
        assert!(result.maturity_amount.is_zero());
        assert!(result.total_deposited.is_zero());
    }

    #[test]
    fn test_zero_rate_sums_instalments() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let rd = recurring_deposit(1_000, dec!(0), "01-01-2020 00:00:00.0", "31-12-2020 00:00:00.0");

        // leap year, so the span is 365 days
        let result = rd.maturity(now).unwrap();

        assert_eq!(result.maturity_amount, Money::from_major(12_000));
        assert!(result.interest_earned.is_zero());
    }
}
