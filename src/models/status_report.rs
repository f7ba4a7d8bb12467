//! Status report models for the Compensation Status Engine.
//!
//! This module contains the [`StatusReport`] response shape produced by the
//! orchestrator, together with the [`SalaryStatus`] classification and the
//! [`AdjustedSalary`] line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryRecord;

/// The compensation status band derived from the average salary.
///
/// # Example
///
/// ```
/// use compensation_engine::models::SalaryStatus;
///
/// let status = SalaryStatus::Green;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"GREEN\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryStatus {
    /// Average salary at or above the upper threshold.
    Green,
    /// Average salary between the lower and upper thresholds.
    Orange,
    /// Average salary below the lower threshold.
    Red,
}

impl std::fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SalaryStatus::Green => "GREEN",
            SalaryStatus::Orange => "ORANGE",
            SalaryStatus::Red => "RED",
        };
        write!(f, "{}", name)
    }
}

/// A salary record after the adjustment rules have been applied.
///
/// One object per input record, in the same order as the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustedSalary {
    /// The adjusted salary amount.
    pub amount: Decimal,
    /// The calendar month of the original record.
    pub month: u32,
    /// The calendar year of the original record.
    pub year: i32,
}

impl From<&SalaryRecord> for AdjustedSalary {
    fn from(record: &SalaryRecord) -> Self {
        Self {
            amount: record.amount,
            month: record.month,
            year: record.year,
        }
    }
}

/// The complete computed compensation status for one employee.
///
/// Created fresh per request and never persisted by the engine itself;
/// the cache layer stores the serialized form under its own key scheme.
/// Field names serialize in PascalCase to match the documented response
/// shape.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{SalaryStatus, StatusReport};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let report = StatusReport {
///     national_key: "NAT1001".to_string(),
///     username: "jsmith".to_string(),
///     email: "jsmith@example.com".to_string(),
///     phone: "+61 400 000 001".to_string(),
///     salaries: vec![],
///     total_salary: Decimal::ZERO,
///     average_salary: Decimal::ZERO,
///     highest_salary: Decimal::ZERO,
///     tax_amount: Decimal::ZERO,
///     status: SalaryStatus::Red,
///     last_updated: Utc::now(),
/// };
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"Status\":\"RED\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusReport {
    /// The employee's national key.
    pub national_key: String,
    /// The employee's login/display name.
    pub username: String,
    /// The employee's email address.
    pub email: String,
    /// The employee's phone number.
    pub phone: String,
    /// The adjusted salary records, same length and order as the input.
    pub salaries: Vec<AdjustedSalary>,
    /// The sum of the adjusted salary amounts.
    pub total_salary: Decimal,
    /// The net-pool average: (total - tax) / record count.
    pub average_salary: Decimal,
    /// The highest adjusted salary amount.
    pub highest_salary: Decimal,
    /// The tax levied on the adjusted total.
    pub tax_amount: Decimal,
    /// The derived status band.
    pub status: SalaryStatus,
    /// The UTC timestamp at which this report was computed.
    pub last_updated: DateTime<Utc>,
}
