use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    Annual,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annual => 1,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Annual => "Annual",
        };
        f.write_str(name)
    }
}

/// engine for compound growth over fractional tenures
#[derive(Debug, Clone, Copy)]
pub struct CompoundingEngine {
    pub frequency: CompoundingFrequency,
}

impl CompoundingEngine {
    pub fn new(frequency: CompoundingFrequency) -> Self {
        Self { frequency }
    }

    /// growth factor `(1 + r/n)^(n * years)`.
    ///
    /// The exponent is not rounded to whole periods, so a tenure of 1.5 years
    /// compounded quarterly grows over exactly six periods and a tenure of 1.6
    /// years over 6.4.
    pub fn growth_factor(&self, annual_rate: Rate, years: f64) -> f64 {
        let n = self.frequency.periods_per_year();
        let base = 1.0 + annual_rate.periodic(n).to_f64();
        base.powf(f64::from(n) * years)
    }

    /// final amount of `principal` left to compound for `years`
    pub fn future_value(&self, principal: Money, annual_rate: Rate, years: f64) -> Result<Money> {
        Money::from_f64(principal.to_f64() * self.growth_factor(annual_rate, years))
    }
}
