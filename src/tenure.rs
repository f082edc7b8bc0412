use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{MaturityError, Result};
use crate::types::DATE_FORMAT;

/// days in the year basis used for every tenure
pub const DAYS_PER_YEAR: f64 = 365.0;

/// parse a `DD-MM-YYYY HH:MM:SS.ffffff` timestamp, interpreted as utc
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let malformed = || MaturityError::MalformedDate {
        value: value.to_string(),
    };
    // `%.f` also accepts a timestamp with no fraction at all
    if !has_fraction(value) {
        return Err(malformed());
    }
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| malformed())
}

fn has_fraction(value: &str) -> bool {
    value.rsplit_once('.').is_some_and(|(_, fraction)| {
        !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
    })
}

/// elapsed tenure of an investment as of a given instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tenure {
    /// whole days elapsed, rounded down
    pub days: i64,
    /// `days / 365`
    pub years: f64,
}

impl Tenure {
    /// resolve the elapsed tenure between `start` and `end`, capped at `now`.
    ///
    /// A deposit that has already matured (`now >= end`) counts its full
    /// declared duration; a running deposit counts only up to `now`.
    pub fn resolve(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let until = if now >= end { end } else { now };
        let elapsed = until - start;
        let mut days = elapsed.num_days();
        if elapsed < Duration::days(days) {
            days -= 1;
        }
        Self {
            days,
            years: days as f64 / DAYS_PER_YEAR,
        }
    }

    /// whole years elapsed, fractional part dropped
    pub fn whole_years(&self) -> i64 {
        self.years.trunc() as i64
    }

    /// whole years expressed in months
    pub fn whole_months(&self) -> i64 {
        self.whole_years() * 12
    }
}
