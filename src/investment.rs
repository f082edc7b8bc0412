use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::instruments::MaturityCalculation;
use crate::records::InvestmentRecord;
use crate::tenure::{parse_timestamp, Tenure};
use crate::types::{InvestmentKind, DATE_DISPLAY_FORMAT};

/// a single savings instrument, built fresh from an input record on every run
#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    pub kind: InvestmentKind,
    pub principal: Money,
    pub rate: Rate,
    /// declared tenure as written in the input; informational only
    pub time: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Investment {
    pub fn new(
        kind: InvestmentKind,
        principal: Money,
        rate: Rate,
        time: Decimal,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            principal,
            rate,
            time,
            start_date,
            end_date,
        }
    }

    /// build a typed investment from a raw record, parsing its dates
    pub fn from_record(kind: InvestmentKind, record: &InvestmentRecord) -> Result<Self> {
        Ok(Self::new(
            kind,
            record.principal,
            Rate::from_percentage(record.rate),
            record.time,
            parse_timestamp(&record.start_date)?,
            parse_timestamp(&record.end_date)?,
        ))
    }

    /// elapsed tenure as of `now`
    pub fn tenure(&self, now: DateTime<Utc>) -> Tenure {
        Tenure::resolve(self.start_date, self.end_date, now)
    }

    /// compute the maturity amount with the formula of this investment's kind
    pub fn maturity(&self, now: DateTime<Utc>) -> Result<MaturityCalculation> {
        self.kind.calculator().maturity(self, self.tenure(now))
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PRINCIPAL : {}, RATE : {}, TIME : {}, START DATE : {}, END DATE : {}",
            self.principal,
            self.rate.as_percentage().normalize(),
            self.time,
            self.start_date.format(DATE_DISPLAY_FORMAT),
            self.end_date.format(DATE_DISPLAY_FORMAT),
        )
    }
}
