pub mod args;
pub mod config;
pub mod decimal;
pub mod errors;
mod fs;
pub mod instruments;
pub mod interest;
pub mod investment;
pub mod properties;
pub mod records;
pub mod report;
pub mod tenure;
pub mod types;

// re-export key types
pub use config::ReportConfig;
pub use decimal::{Money, Rate};
pub use errors::{MaturityError, Result};
pub use instruments::{
    FixedDeposit, MaturityCalculation, MaturityCalculator, PublicProvidentFund, RecurringDeposit,
};
pub use interest::{CompoundingEngine, CompoundingFrequency};
pub use investment::Investment;
pub use properties::UserDetails;
pub use records::{FinancialDetails, InvestmentRecord};
pub use report::{MaturityReport, ReportEntry};
pub use tenure::{parse_timestamp, Tenure};
pub use types::{InvestmentKind, OutputFormat};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
