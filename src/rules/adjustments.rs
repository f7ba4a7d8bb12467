//! Salary adjustment rules.
//!
//! This module applies the December bonus and summer deduction multipliers
//! to salary records. Adjustment never mutates an input record; it produces
//! new records with the same month and year.

use rust_decimal::Decimal;

use crate::models::SalaryRecord;

/// The month that receives the end-of-year bonus.
pub const DECEMBER_MONTH: u32 = 12;

/// The months that receive the summer deduction.
pub const SUMMER_MONTHS: [u32; 3] = [6, 7, 8];

/// Returns the December bonus multiplier (10% uplift).
pub fn december_bonus_multiplier() -> Decimal {
    Decimal::new(110, 2)
}

/// Returns the summer deduction multiplier (5% reduction).
pub fn summer_deduction_multiplier() -> Decimal {
    Decimal::new(95, 2)
}

/// Returns true iff the month falls in the summer deduction window.
pub fn is_summer_month(month: u32) -> bool {
    SUMMER_MONTHS.contains(&month)
}

/// Applies the adjustment rules to a single record.
///
/// The bonus is applied before the deduction. The month sets are disjoint,
/// so no record ever receives both multipliers; the fixed order is part of
/// the numeric contract regardless.
///
/// # Example
///
/// ```
/// use compensation_engine::models::SalaryRecord;
/// use compensation_engine::rules::adjust_record;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let december = SalaryRecord::new(Decimal::from_str("1000.00").unwrap(), 12, 2025);
/// let adjusted = adjust_record(&december);
/// assert_eq!(adjusted.amount, Decimal::from_str("1100.00").unwrap());
/// ```
pub fn adjust_record(record: &SalaryRecord) -> SalaryRecord {
    let mut amount = record.amount;

    if record.month == DECEMBER_MONTH {
        amount *= december_bonus_multiplier();
    }
    if is_summer_month(record.month) {
        amount *= summer_deduction_multiplier();
    }

    record.with_amount(amount)
}

/// Applies the adjustment rules to every record in a list.
///
/// The output has the same length and ordering as the input.
pub fn apply_adjustments(records: &[SalaryRecord]) -> Vec<SalaryRecord> {
    records.iter().map(adjust_record).collect()
}
